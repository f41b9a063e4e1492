use plotly::common::{Line, Mode, Title, Visible};
use plotly::layout::Axis;
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::api_client::environmental::{EnvironmentalData, Feature};

/// The one drawing surface. At most one live Plotly instance is bound to it;
/// `Plotly.purge` runs before every `newPlot` and on unmount.
const CHART_DIV_ID: &str = "environmental-chart";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue);

    #[wasm_bindgen(js_namespace = Plotly, js_name = purge)]
    fn purge(div_id: &str);
}

/// Build the three line traces over the shared timestamp axis. All three are
/// always constructed; the two that do not match `selected` are flagged
/// `legendonly` rather than omitted, so the user can still bring them back
/// through the legend.
pub fn build_traces(
    data: &EnvironmentalData,
    selected: Feature,
) -> Vec<Box<Scatter<String, f64>>> {
    Feature::ALL
        .iter()
        .map(|feature| {
            let visible = if *feature == selected {
                Visible::True
            } else {
                Visible::LegendOnly
            };

            Scatter::new(data.timestamp.clone(), feature.series(data).to_vec())
                .mode(Mode::Lines)
                .name(feature.label())
                .line(Line::new().color(feature.line_color()).width(2.0))
                .visible(visible)
                .hover_template("%{fullData.name}: %{y}<extra></extra>")
        })
        .collect()
}

pub fn build_layout() -> Layout {
    Layout::new()
        .x_axis(Axis::new().title(Title::with_text("Time")))
        .y_axis(Axis::new().title(Title::with_text("Measurements")))
        .show_legend(true)
        .height(400)
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub data: EnvironmentalData,
    pub feature: Feature,
}

#[function_component(SensorChart)]
pub fn sensor_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let data = props.data.clone();
    let feature = props.feature;

    use_effect_with(
        (container_ref.clone(), data, feature),
        move |(container_ref, data, feature)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(CHART_DIV_ID);

                // Release the previous chart before drawing the replacement,
                // otherwise repeated renders stack instances on the canvas.
                purge(CHART_DIV_ID);

                let traces = build_traces(data, *feature);
                let data_js = js_sys::Array::new();
                for trace in &traces {
                    let trace_json = serde_json::to_string(trace).unwrap();
                    let trace_js = js_sys::JSON::parse(&trace_json).unwrap();
                    data_js.push(&trace_js);
                }

                let layout_json = serde_json::to_string(&build_layout()).unwrap();
                let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

                new_plot(CHART_DIV_ID, data_js.into(), layout_js);
            }

            || purge(CHART_DIV_ID)
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample_data() -> EnvironmentalData {
        EnvironmentalData {
            timestamp: vec!["t1".to_string(), "t2".to_string()],
            air_quality_index: vec![1.0, 2.0],
            temperature: vec![10.0, 20.0],
            humidity: vec![50.0, 60.0],
        }
    }

    fn trace_values(data: &EnvironmentalData, selected: Feature) -> Vec<Value> {
        build_traces(data, selected)
            .iter()
            .map(|t| serde_json::to_value(t).unwrap())
            .collect()
    }

    #[test]
    fn test_three_traces_over_shared_axis() {
        let data = sample_data();
        let traces = trace_values(&data, Feature::AirQualityIndex);

        assert_eq!(traces.len(), 3);
        for trace in &traces {
            assert_eq!(trace["x"], serde_json::json!(["t1", "t2"]));
            assert_eq!(trace["y"].as_array().unwrap().len(), data.len());
        }
    }

    #[test]
    fn test_only_selected_feature_is_visible() {
        for selected in Feature::ALL {
            let traces = trace_values(&sample_data(), selected);

            let hidden: Vec<_> = traces
                .iter()
                .filter(|t| t["visible"] == serde_json::json!("legendonly"))
                .collect();
            assert_eq!(hidden.len(), 2);

            let visible: Vec<_> = traces
                .iter()
                .filter(|t| t["visible"] != serde_json::json!("legendonly"))
                .collect();
            assert_eq!(visible.len(), 1);
            assert_eq!(visible[0]["name"], serde_json::json!(selected.label()));
        }
    }

    #[test]
    fn test_feature_switch_does_not_change_series_values() {
        let data = sample_data();
        let before = trace_values(&data, Feature::AirQualityIndex);
        let after = trace_values(&data, Feature::Humidity);

        for (a, b) in before.iter().zip(after.iter()) {
            assert_eq!(a["name"], b["name"]);
            assert_eq!(a["x"], b["x"]);
            assert_eq!(a["y"], b["y"]);
        }
    }

    #[test]
    fn test_tooltip_renders_label_and_raw_value() {
        let traces = trace_values(&sample_data(), Feature::Temperature);
        for trace in &traces {
            assert_eq!(
                trace["hovertemplate"],
                serde_json::json!("%{fullData.name}: %{y}<extra></extra>")
            );
        }
    }

    #[test]
    fn test_axis_titles() {
        let layout = serde_json::to_value(build_layout()).unwrap();
        assert_eq!(layout["xaxis"]["title"]["text"], serde_json::json!("Time"));
        assert_eq!(
            layout["yaxis"]["title"]["text"],
            serde_json::json!("Measurements")
        );
    }
}
