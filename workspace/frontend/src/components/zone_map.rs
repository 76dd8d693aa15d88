use compute::{ChoroplethStyler, Projection, ZoneCollection, ZoneProbabilityIndex};
use yew::prelude::*;

use crate::widgets::error::ErrorDisplay;

const ZONES_GEOJSON: &str = include_str!("../../assets/zones.geojson");
const MAP_WIDTH: f64 = 800.0;
const MAP_HEIGHT: f64 = 600.0;

#[derive(Properties, PartialEq)]
pub struct ZoneMapProps {
    pub index: ZoneProbabilityIndex,
}

/// Choropleth of the forecast zones. Hovering a zone shows its tooltip.
#[function_component(ZoneMap)]
pub fn zone_map(props: &ZoneMapProps) -> Html {
    let zones = use_memo((), |_| {
        ZoneCollection::from_geojson(ZONES_GEOJSON).map_err(|e| e.to_string())
    });

    let zones = match &*zones {
        Ok(zones) => zones,
        Err(error) => return html! { <ErrorDisplay message={error.clone()} /> },
    };
    let Some(bounds) = zones.bounds() else {
        return html! { <p class="text-gray-500">{"No zone boundaries available"}</p> };
    };

    let projection = Projection::fit(bounds, MAP_WIDTH, MAP_HEIGHT);
    let styler = ChoroplethStyler::new(&props.index);

    html! {
        <svg
            class="w-full h-auto bg-sky-100 rounded-box"
            viewBox={format!("0 0 {} {}", MAP_WIDTH, MAP_HEIGHT)}
            preserveAspectRatio="xMidYMid meet"
        >
            { for zones.features.iter().map(|feature| {
                let style = styler.style_for(feature.zone);
                let tooltip = styler.tooltip(feature.zone, feature.name.as_deref());
                html! {
                    <path
                        key={feature.zone}
                        d={projection.svg_path(feature)}
                        fill={style.fill_color}
                        fill-opacity={format!("{:.2}", style.fill_opacity)}
                        stroke={style.border_color}
                        stroke-width={style.border_weight.to_string()}
                        fill-rule="evenodd"
                    >
                        <title>{tooltip.to_string()}</title>
                    </path>
                }
            }) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_zones_load() {
        let zones = ZoneCollection::from_geojson(ZONES_GEOJSON).unwrap();

        let ids: Vec<_> = zones.features.iter().map(|feature| feature.zone).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
        assert!(zones.features.iter().all(|feature| feature.name.is_some()));
        assert!(zones.bounds().is_some());
    }
}
