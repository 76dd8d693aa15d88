use chrono::NaiveDate;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::stores::use_time_range;

#[derive(Clone, Copy, PartialEq)]
enum Bound {
    Start,
    End,
}

/// Start and end date pickers writing to the shared range store.
#[function_component(DateBar)]
pub fn date_bar() -> Html {
    let (store, selection) = use_time_range();
    let range = selection.range;

    let on_change = |bound: Bound| {
        let store = store.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Ok(date) = NaiveDate::parse_from_str(&input.value(), common::DATE_FORMAT) else {
                log::warn!("Ignoring unparseable date {:?}", input.value());
                return;
            };
            let current = store.range();
            match bound {
                Bound::Start => store.set_range(date, current.end),
                Bound::End => store.set_range(current.start, date),
            };
        })
    };

    html! {
        <div class="card bg-base-100 shadow mb-6">
            <div class="card-body py-4 flex flex-row flex-wrap items-end gap-4">
                <label class="form-control">
                    <span class="label-text">{"Start date"}</span>
                    <input
                        type="date"
                        class="input input-bordered input-sm"
                        value={common::format_date(range.start)}
                        max={common::format_date(range.end)}
                        onchange={on_change(Bound::Start)}
                    />
                </label>
                <label class="form-control">
                    <span class="label-text">{"End date"}</span>
                    <input
                        type="date"
                        class="input input-bordered input-sm"
                        value={common::format_date(range.end)}
                        min={common::format_date(range.start)}
                        onchange={on_change(Bound::End)}
                    />
                </label>
            </div>
        </div>
    }
}
