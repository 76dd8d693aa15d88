use model::TimeBucket;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::stores::use_time_bucket;

/// Slider over the eight 6-hour forecast windows.
#[function_component(TimeBucketControl)]
pub fn time_bucket_control() -> Html {
    let (store, current) = use_time_bucket();

    let onchange = Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        match input.value().parse::<i64>() {
            Ok(index) => {
                if let Err(err) = store.set_bucket(index) {
                    log::warn!("Ignoring bucket change: {}", err);
                }
            }
            Err(err) => log::warn!("Bucket slider sent {:?}: {}", input.value(), err),
        }
    });

    html! {
        <div class="card bg-base-100 shadow mb-4">
            <div class="card-body py-4">
                <label class="font-semibold" for="time-bucket">
                    {"Forecast window: "}<span class="text-primary">{current.label()}</span>
                </label>
                <input
                    id="time-bucket"
                    type="range"
                    class="range range-primary range-sm"
                    min="0"
                    max={TimeBucket::MAX_INDEX.to_string()}
                    step="1"
                    value={current.index().to_string()}
                    {onchange}
                />
                <div class="flex justify-between text-xs text-gray-500">
                    { for TimeBucket::all().map(|bucket| html! { <span>{bucket.label()}</span> }) }
                </div>
            </div>
        </div>
    }
}
