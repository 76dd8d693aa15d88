use compute::ForecastSnapshot;
use compute::summary::ranked_summary;
use yew::prelude::*;

use crate::widgets::error::ErrorDisplay;
use crate::widgets::loading::Loading;

#[derive(Properties, PartialEq)]
pub struct TopZonesProps {
    pub snapshot: ForecastSnapshot,
}

#[function_component(TopZonesPanel)]
pub fn top_zones_panel(props: &TopZonesProps) -> Html {
    let snapshot = &props.snapshot;

    let body = if snapshot.loading {
        html! { <Loading text="Loading..." /> }
    } else if let Some(error) = &snapshot.error {
        html! { <ErrorDisplay message={error.clone()} /> }
    } else if let Some(message) = snapshot.panel_message() {
        html! { <p class="text-gray-500">{message}</p> }
    } else {
        html! {
            <ol class="flex flex-col gap-2">
                { for ranked_summary(&snapshot.index).into_iter().map(|row| html! {
                    <li key={row.zone} class="flex justify-between items-center">
                        <span>
                            <span class="badge badge-neutral mr-2">{row.position}</span>
                            {row.name}
                        </span>
                        <span class="font-bold" style={format!("color: {};", row.emphasis_color)}>
                            {row.percentage}
                        </span>
                    </li>
                }) }
            </ol>
        }
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Top Zones"}</h3>
                <p class="text-sm text-gray-500">
                    {format!("{} ({})", snapshot.index.forecast_window, snapshot.bucket_label)}
                </p>
                {body}
            </div>
        </div>
    }
}
