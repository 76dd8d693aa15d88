//! Client-side state model of the dashboard.
//!
//! Two stores are shared between views: the date range used by the chart and report
//! pages, and the forecast bucket used by the map. Each view keeps its own
//! [`FetchSlot`] to track the request it is waiting on.

pub mod error;
pub mod fetch_slot;
pub mod store;
pub mod time;

pub use error::{ModelError, Result};
pub use fetch_slot::{FetchSlot, Generation, Resolution};
pub use store::{Store, SubscriptionId, TimeBucketStore, TimeRangeStore};
pub use time::{TimeBucket, TimeRange};
