use std::fmt;

use tracing::debug;

/// Sequence number of a request issued by a [`FetchSlot`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What happened to a response handed to [`FetchSlot::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer request was issued after this one; the response was dropped.
    Stale,
}

/// View-side state of a fetched resource.
///
/// Every call to [`begin`](Self::begin) issues a new generation. Only the response
/// carrying the latest generation may update the slot, so a slow response to an
/// older request can never overwrite a newer one.
///
/// A failed request sets the error but keeps the last successful data, so a view
/// may show stale data next to the error message.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSlot<T> {
    generation: Generation,
    loading: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self {
            generation: Generation::default(),
            loading: false,
            data: None,
            error: None,
        }
    }
}

impl<T> FetchSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a new request as outstanding and returns its generation.
    pub fn begin(&mut self) -> Generation {
        self.generation = Generation(self.generation.0 + 1);
        self.loading = true;
        self.error = None;
        debug!(generation = %self.generation, "Fetch started");
        self.generation
    }

    pub fn resolve<E: fmt::Display>(&mut self, generation: Generation, result: Result<T, E>) -> Resolution {
        if generation != self.generation {
            debug!(
                %generation,
                current = %self.generation,
                "Discarding response of superseded request"
            );
            return Resolution::Stale;
        }

        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => {
                debug!(%generation, error = %err, "Fetch failed, keeping previous data");
                self.error = Some(err.to_string());
            }
        }
        Resolution::Applied
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
