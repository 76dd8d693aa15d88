use serde_json::Value;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct PlotProps {
    pub id: AttrValue,
    pub data: Value,
    pub layout: Value,
    #[prop_or(AttrValue::Static("height: 350px;"))]
    pub style: AttrValue,
}

/// Plotly chart drawn into its own div once rendered, and redrawn when the traces change.
#[function_component(Plot)]
pub fn plot(props: &PlotProps) -> Html {
    let chart_ref = use_node_ref();

    {
        let chart_ref = chart_ref.clone();
        use_effect_with((props.data.clone(), props.layout.clone()), move |(data, layout)| {
            if let Some(element) = chart_ref.cast::<Element>() {
                let config = serde_json::json!({"responsive": true, "displayModeBar": false});
                let converted = (
                    serde_wasm_bindgen::to_value(data),
                    serde_wasm_bindgen::to_value(layout),
                    serde_wasm_bindgen::to_value(&config),
                );
                match converted {
                    (Ok(data), Ok(layout), Ok(config)) => {
                        newPlot(&element.id(), data, layout, config);
                    }
                    _ => log::error!("Failed to convert chart {} for Plotly", element.id()),
                }
            }
            || ()
        });
    }

    html! {
        <div ref={chart_ref} id={props.id.clone()} class="chart-container" style={props.style.clone()}></div>
    }
}
