use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::api_client::environmental::{Feature, TrendPeriod};

/// Known sensor sites served by the backend.
pub const LOCATIONS: [&str; 2] = ["location1", "location2"];

#[derive(Properties, PartialEq)]
pub struct FeatureSelectorProps {
    pub selected: Feature,
    pub on_select: Callback<Feature>,
}

/// One button per series. Selecting a feature only flips chart visibility;
/// it never re-fetches.
#[function_component(FeatureSelector)]
pub fn feature_selector(props: &FeatureSelectorProps) -> Html {
    html! {
        <div class="join">
            { for Feature::ALL.iter().map(|feature| {
                let feature = *feature;
                let on_select = props.on_select.clone();
                let active = if feature == props.selected { "btn-active" } else { "" };

                html! {
                    <button
                        class={classes!("btn", "btn-sm", "join-item", active)}
                        onclick={Callback::from(move |_| on_select.emit(feature))}
                    >
                        { feature.label() }
                    </button>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TrendSelectorProps {
    pub on_select: Callback<TrendPeriod>,
}

#[function_component(TrendSelector)]
pub fn trend_selector(props: &TrendSelectorProps) -> Html {
    html! {
        <div class="join">
            { for TrendPeriod::ALL.iter().map(|period| {
                let period = *period;
                let on_select = props.on_select.clone();

                html! {
                    <button
                        class="btn btn-sm btn-ghost join-item"
                        onclick={Callback::from(move |_| on_select.emit(period))}
                    >
                        { period.label() }
                    </button>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LocationPickerProps {
    pub selected: String,
    pub on_change: Callback<String>,
}

#[function_component(LocationPicker)]
pub fn location_picker(props: &LocationPickerProps) -> Html {
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                log::debug!("Location changed to: {}", select.value());
                on_change.emit(select.value());
            }
        })
    };

    html! {
        <select class="select select-sm select-bordered" onchange={on_change}>
            { for LOCATIONS.iter().map(|location| {
                html! {
                    <option value={*location} selected={*location == props.selected}>
                        { location }
                    </option>
                }
            })}
        </select>
    }
}
