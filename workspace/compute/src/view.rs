//! View controllers.
//!
//! A view owns the [`FetchSlot`] of the resource it displays. Refreshing issues a
//! new request generation before suspending on the network, so when two requests
//! overlap only the latest one may update the view.

use std::cell::RefCell;
use std::fmt;
use std::future::Future;

use chrono::{Local, TimeZone};
use common::PredictionResponse;
use model::{FetchSlot, Generation, Resolution, TimeBucket};
use tracing::debug;

use crate::bucket::{MatchOutcome, match_bucket};
use crate::summary::NO_PREDICTIONS_MESSAGE;
use crate::zone_index::ZoneProbabilityIndex;

#[derive(Debug)]
pub struct FetchView<T> {
    slot: RefCell<FetchSlot<T>>,
}

impl<T> Default for FetchView<T> {
    fn default() -> Self {
        Self {
            slot: RefCell::new(FetchSlot::new()),
        }
    }
}

impl<T> FetchView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `fetch` as the view's newest request and records its outcome.
    ///
    /// The slot is not borrowed while the request is in flight, so other
    /// refreshes of the same view may start meanwhile.
    pub async fn refresh<F>(&self, fetch: F) -> Resolution
    where
        F: Future<Output = common::Result<T>>,
    {
        let generation = self.begin();
        let result = fetch.await;
        self.resolve(generation, result)
    }

    /// Starts a request by hand, for callers that spawn the fetch themselves.
    pub fn begin(&self) -> Generation {
        self.slot.borrow_mut().begin()
    }

    /// Completes the request started as `generation`.
    pub fn resolve(&self, generation: Generation, result: common::Result<T>) -> Resolution {
        let resolution = self.slot.borrow_mut().resolve(generation, result);
        debug!(%generation, ?resolution, "Fetch resolved");
        resolution
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&FetchSlot<T>) -> R) -> R {
        f(&self.slot.borrow())
    }

    pub fn is_loading(&self) -> bool {
        self.slot.borrow().is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.slot.borrow().error().map(str::to_string)
    }
}

/// Forecast payload of the map page.
pub type ForecastView = FetchView<PredictionResponse>;

/// Everything the map page renders for one bucket, derived from the current payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSnapshot {
    pub bucket_label: String,
    pub index: ZoneProbabilityIndex,
    pub matched: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl ForecastSnapshot {
    /// Status line of the top zones panel, `None` when the ranked list should be shown.
    pub fn panel_message(&self) -> Option<String> {
        if self.loading {
            Some("Loading...".to_string())
        } else if let Some(error) = &self.error {
            Some(format!("Error: {}", error))
        } else if self.index.ranked_zones.is_empty() {
            Some(NO_PREDICTIONS_MESSAGE.to_string())
        } else {
            None
        }
    }
}

impl FetchView<PredictionResponse> {
    pub fn forecast(&self, bucket: TimeBucket) -> ForecastSnapshot {
        self.forecast_in(bucket, &Local)
    }

    pub fn forecast_in<Tz>(&self, bucket: TimeBucket, tz: &Tz) -> ForecastSnapshot
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let slot = self.slot.borrow();
        let bucket_label = bucket.label();
        let outcome = match_bucket(slot.data(), &bucket_label);
        ForecastSnapshot {
            index: ZoneProbabilityIndex::build_in(outcome.bucket(), tz),
            matched: matches!(outcome, MatchOutcome::Matched(_)),
            bucket_label,
            loading: slot.is_loading(),
            error: slot.error().map(str::to_string),
        }
    }
}
