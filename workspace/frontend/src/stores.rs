//! Shared stores, handed to every page through a Yew context.

use std::cell::Cell;
use std::rc::Rc;

use model::{TimeBucket, TimeBucketStore, TimeRange, TimeRangeStore};
use yew::prelude::*;

/// The two dashboard-wide stores. Pages read them through [`use_time_range`] and
/// [`use_time_bucket`] and write through the store setters.
#[derive(Clone, Debug, Default)]
pub struct DashboardStores {
    pub time_range: Rc<TimeRangeStore>,
    pub time_bucket: Rc<TimeBucketStore>,
}

impl PartialEq for DashboardStores {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.time_range, &other.time_range)
            && Rc::ptr_eq(&self.time_bucket, &other.time_bucket)
    }
}

#[derive(Properties, PartialEq)]
pub struct StoresProviderProps {
    pub children: Children,
}

#[function_component(StoresProvider)]
pub fn stores_provider(props: &StoresProviderProps) -> Html {
    let stores = use_memo((), |_| DashboardStores::default());

    html! {
        <ContextProvider<DashboardStores> context={(*stores).clone()}>
            { for props.children.iter() }
        </ContextProvider<DashboardStores>>
    }
}

#[hook]
pub fn use_stores() -> DashboardStores {
    use_context::<DashboardStores>().expect("StoresProvider is missing")
}

/// Date range as seen by one component. `revision` counts the store writes the
/// component has observed, so setting the same range twice still compares unequal
/// and fetch hooks keyed on the selection run again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeSelection {
    pub range: TimeRange,
    pub revision: u64,
}

impl RangeSelection {
    pub fn new(range: TimeRange) -> Self {
        Self { range, revision: 0 }
    }

    pub fn next(self, range: TimeRange) -> Self {
        Self {
            range,
            revision: self.revision.wrapping_add(1),
        }
    }
}

/// Current date range; the component re-renders on every store write.
#[hook]
pub fn use_time_range() -> (Rc<TimeRangeStore>, RangeSelection) {
    let store = use_stores().time_range;
    let selection = use_state(|| RangeSelection::new(store.range()));

    {
        let store = store.clone();
        let selection = selection.clone();
        use_effect_with((), move |_| {
            let latest = Rc::new(Cell::new(*selection));
            let id = store.subscribe(move |value: &TimeRange| {
                let next = latest.get().next(*value);
                latest.set(next);
                selection.set(next);
            });
            move || {
                store.unsubscribe(id);
            }
        });
    }

    let current = *selection;
    (store, current)
}

/// Selected forecast bucket; the component re-renders whenever the store changes.
#[hook]
pub fn use_time_bucket() -> (Rc<TimeBucketStore>, TimeBucket) {
    let store = use_stores().time_bucket;
    let bucket = use_state(|| store.bucket());

    {
        let store = store.clone();
        let bucket = bucket.clone();
        use_effect_with((), move |_| {
            let id = store.subscribe(move |value: &TimeBucket| bucket.set(*value));
            move || {
                store.unsubscribe(id);
            }
        });
    }

    let current = *bucket;
    (store, current)
}
