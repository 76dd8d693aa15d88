use common::{HourCount, ZoneCount};
use compute::aggregation::{
    Aggregation, NO_DATA_MESSAGE, aggregate, hour_slice_label, hour_summary, slice_color, zone_summary,
};
use compute::FetchView;
use model::TimeRange;
use serde_json::json;
use yew::prelude::*;

use super::plot::Plot;
use crate::api_client;
use crate::hooks::use_fetch_view;
use crate::stores::{RangeSelection, use_time_range};
use crate::widgets::error::ErrorDisplay;
use crate::widgets::loading::Loading;

const BAR_COLOR: &str = "#0d6efd";

/// Loading, error and empty states shared by both charts. Returns the rows once
/// there is something to draw.
fn chart_state<R: Clone>(view: &FetchView<Vec<R>>) -> Result<Vec<R>, Html> {
    view.with_state(|slot| {
        if slot.is_loading() {
            return Err(html! { <Loading text="Loading..." /> });
        }
        if let Some(error) = slot.error() {
            return Err(html! { <ErrorDisplay message={error.to_string()} /> });
        }
        Ok(slot.data().cloned().unwrap_or_default())
    })
}

fn no_data() -> Html {
    html! { <p class="text-center text-gray-500 py-12">{NO_DATA_MESSAGE}</p> }
}

fn zone_chart(aggregation: &Aggregation<common::ZoneId>, range: &TimeRange) -> Html {
    let Some(summary) = zone_summary(aggregation, range) else {
        return no_data();
    };
    let data = json!([{
        "type": "bar",
        "x": aggregation.shares.iter().map(|share| format!("Zone {}", share.key)).collect::<Vec<_>>(),
        "y": aggregation.shares.iter().map(|share| share.count).collect::<Vec<_>>(),
        "text": aggregation.shares.iter().map(|share| share.percentage()).collect::<Vec<_>>(),
        "hovertemplate": "%{x}: %{y} sightings (%{text})<extra></extra>",
        "marker": {"color": BAR_COLOR},
    }]);
    let layout = json!({
        "margin": {"t": 10, "r": 10, "l": 50, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"title": "Zone"},
        "yaxis": {"title": "Sightings", "showgrid": true, "gridcolor": "#eee"},
    });

    html! {
        <>
            <Plot id="chart-sightings-by-zone" {data} {layout} />
            <p class="text-sm text-gray-500 mt-2">{summary}</p>
        </>
    }
}

fn hour_chart(aggregation: &Aggregation<u32>, range: &TimeRange) -> Html {
    let Some(summary) = hour_summary(aggregation, range) else {
        return no_data();
    };
    let data = json!([{
        "type": "pie",
        "labels": aggregation.shares.iter().map(hour_slice_label).collect::<Vec<_>>(),
        "values": aggregation.shares.iter().map(|share| share.count).collect::<Vec<_>>(),
        "marker": {
            "colors": (0..aggregation.len()).map(slice_color).collect::<Vec<_>>(),
        },
        "textinfo": "label",
        "sort": false,
    }]);
    let layout = json!({
        "margin": {"t": 10, "r": 10, "l": 10, "b": 10},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "showlegend": true,
        "legend": {"orientation": "h", "y": -0.1},
    });

    html! {
        <>
            <Plot id="chart-sightings-by-hour" {data} {layout} />
            <p class="text-sm text-gray-500 mt-2">{summary}</p>
        </>
    }
}

#[function_component(ZoneBarChart)]
pub fn zone_bar_chart() -> Html {
    let (_, selection) = use_time_range();
    let range = selection.range;
    let view = use_fetch_view(selection, |selection: &RangeSelection| {
        let TimeRange { start, end } = selection.range;
        async move { api_client::client().sightings_by_zone(start, end).await }
    });

    let body = match chart_state::<ZoneCount>(&view) {
        Ok(records) => zone_chart(&aggregate(&records), &range),
        Err(status) => status,
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Orca Sightings by Zone"}</h3>
                {body}
            </div>
        </div>
    }
}

#[function_component(HourlyPieChart)]
pub fn hourly_pie_chart() -> Html {
    let (_, selection) = use_time_range();
    let range = selection.range;
    let view = use_fetch_view(selection, |selection: &RangeSelection| {
        let TimeRange { start, end } = selection.range;
        async move { api_client::client().sightings_by_hour(start, end).await }
    });

    let body = match chart_state::<HourCount>(&view) {
        Ok(records) => hour_chart(&aggregate(&records), &range),
        Err(status) => status,
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{"Orca Sightings by Hour"}</h3>
                {body}
            </div>
        </div>
    }
}
