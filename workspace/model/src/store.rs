//! Shared state stores.
//!
//! A store owns one value and a list of subscribers. The only way to change the
//! value is the store's setter, which notifies every subscriber synchronously
//! before returning. Stores are single-threaded (`Rc`/`RefCell`) and are shared
//! between views by reference.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use chrono::{Local, NaiveDate};
use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::time::{TimeBucket, TimeRange};

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<T> = Rc<dyn Fn(&T)>;

pub struct Store<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<(SubscriptionId, Listener<T>)>>,
    next_id: Cell<u64>,
}

impl<T: Clone + PartialEq + fmt::Debug> Store<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: RefCell::new(initial),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Replaces the value and notifies subscribers if it changed.
    ///
    /// Returns whether subscribers were notified.
    pub fn set(&self, value: T) -> bool {
        if *self.value.borrow() == value {
            trace!(?value, "Store value unchanged, skipping notification");
            return false;
        }
        debug!(?value, "Store value updated");
        *self.value.borrow_mut() = value;
        self.notify();
        true
    }

    /// Replaces the value and notifies subscribers even when it is unchanged.
    pub fn replace(&self, value: T) {
        debug!(?value, "Store value replaced");
        *self.value.borrow_mut() = value;
        self.notify();
    }

    /// Registers a listener that runs after every change.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        trace!(?id, "Subscriber added");
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        let removed = listeners.len() != before;
        if !removed {
            warn!(?id, "Unsubscribe for unknown subscription");
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self) {
        // Listeners may read or write the store, so no borrow is held while they run.
        let snapshot = self.get();
        let listeners: Vec<Listener<T>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        trace!(count = listeners.len(), "Notifying subscribers");
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &self.value.borrow())
            .field("subscribers", &self.listeners.borrow().len())
            .finish()
    }
}

/// Date range shared by the charts and reports pages.
#[derive(Debug)]
pub struct TimeRangeStore {
    inner: Store<TimeRange>,
}

impl TimeRangeStore {
    pub fn new(initial: TimeRange) -> Self {
        Self {
            inner: Store::new(initial),
        }
    }

    /// Store holding the default range ending on `today`.
    pub fn ending_on(today: NaiveDate) -> Self {
        Self::new(TimeRange::default_for(today))
    }

    pub fn range(&self) -> TimeRange {
        self.inner.get()
    }

    /// Stores the range and notifies every subscriber, so picking the current
    /// range again still refetches.
    ///
    /// Reversed ranges are accepted as-is; the date pickers keep them ordered.
    pub fn set_range(&self, start: NaiveDate, end: NaiveDate) {
        let range = TimeRange::new(start, end);
        if !range.is_ordered() {
            debug!(%start, %end, "Storing reversed date range");
        }
        self.inner.replace(range)
    }

    pub fn subscribe(&self, listener: impl Fn(&TimeRange) + 'static) -> SubscriptionId {
        self.inner.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscriber_count()
    }
}

impl Default for TimeRangeStore {
    fn default() -> Self {
        Self::ending_on(Local::now().date_naive())
    }
}

/// Forecast window selected on the map page.
#[derive(Debug)]
pub struct TimeBucketStore {
    inner: Store<TimeBucket>,
}

impl Default for TimeBucketStore {
    fn default() -> Self {
        Self::new(TimeBucket::default())
    }
}

impl TimeBucketStore {
    pub fn new(initial: TimeBucket) -> Self {
        Self {
            inner: Store::new(initial),
        }
    }

    pub fn bucket(&self) -> TimeBucket {
        self.inner.get()
    }

    /// Selects bucket `index`. Indices outside `0..=7` are rejected and nobody is notified.
    pub fn set_bucket(&self, index: i64) -> Result<bool> {
        let bucket = TimeBucket::new(index).inspect_err(|e| warn!("Rejected bucket change: {}", e))?;
        Ok(self.inner.set(bucket))
    }

    pub fn subscribe(&self, listener: impl Fn(&TimeBucket) + 'static) -> SubscriptionId {
        self.inner.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscriber_count()
    }
}
