use compute::report::{SightingCard, newest_first, sighting_card, sightings_empty_message, sightings_header};
use model::TimeRange;
use yew::prelude::*;

use crate::api_client;
use crate::components::date_bar::DateBar;
use crate::components::layout::Layout;
use crate::hooks::use_fetch_view;
use crate::stores::{RangeSelection, use_time_range};
use crate::widgets::error::ErrorDisplay;

fn card(card: SightingCard) -> Html {
    html! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body p-4">
                <h4 class="card-title text-base">{card.zone_label}</h4>
                <p class="text-sm text-gray-500">{card.time_label}</p>
                <div class="flex gap-6 text-sm">
                    <span>{"Count: "}<strong>{card.count_label}</strong></span>
                    <span>{"Direction: "}<strong>{card.direction_label}</strong></span>
                </div>
                {if let Some(since_last) = card.since_last {
                    html! { <p class="text-xs text-gray-500">{format!("Since last sighting: {}", since_last)}</p> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}

#[function_component(ReportsPage)]
pub fn reports_page() -> Html {
    let (_, selection) = use_time_range();
    let view = use_fetch_view(selection, |selection: &RangeSelection| {
        let TimeRange { start, end } = selection.range;
        async move { api_client::client().sightings(start, end).await }
    });

    let (header, empty, error, cards) = view.with_state(|slot| {
        let records = slot.data().map(Vec::as_slice).unwrap_or_default();
        let cards: Vec<SightingCard> = newest_first(records, &chrono::Local)
            .into_iter()
            .map(sighting_card)
            .collect();
        (
            sightings_header(records.len(), slot.is_loading()),
            sightings_empty_message(records.len(), slot.is_loading()),
            slot.error().map(str::to_string),
            cards,
        )
    });

    html! {
        <Layout title="Sighting Reports">
            <DateBar />
            <h2 class="text-lg font-semibold mb-4">{header}</h2>
            {if let Some(error) = error {
                html! { <ErrorDisplay message={error} /> }
            } else {
                html! {}
            }}
            {if let Some(message) = empty {
                html! { <p class="text-center text-gray-500 py-8">{message}</p> }
            } else {
                html! {}
            }}
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
                { for cards.into_iter().map(card) }
            </div>
        </Layout>
    }
}
