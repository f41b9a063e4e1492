use yew::prelude::*;

use crate::api_client::environmental::{
    get_environmental_data, EnvironmentalData, Feature, TrendPeriod,
};
use crate::api_client::ApiError;
use crate::common::error::ErrorBanner;
use crate::common::loading::LoadingSpinner;

use super::chart::SensorChart;
use super::controls::{FeatureSelector, LocationPicker, TrendSelector};
use super::threshold::{parse_threshold, ThresholdControl};

pub const DEFAULT_LOCATION: &str = "location1";

const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Please try again.";

/// Fold a completed load into the next (envelope, banner) pair. A successful
/// load replaces the envelope wholesale and clears the banner; a failed load
/// keeps the previous envelope and raises the generic failure message.
fn load_outcome(
    result: Result<EnvironmentalData, ApiError>,
    prev: Option<EnvironmentalData>,
) -> (Option<EnvironmentalData>, Option<String>) {
    match result {
        Ok(envelope) => (Some(envelope), None),
        Err(e) => {
            log::error!("Error fetching data: {}", e);
            (prev, Some(LOAD_FAILED_MESSAGE.to_string()))
        }
    }
}

/// The dashboard owns all mutable widget state: the last-loaded envelope, the
/// selected feature, the active location, and the loading/error indicators.
/// On a failed load the previous envelope stays rendered (stale data beats a
/// blank chart). Overlapping loads are not de-duplicated; the last response
/// to resolve wins.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let data = use_state(|| None::<EnvironmentalData>);
    let selected_feature = use_state(Feature::default);
    let location = use_state(|| DEFAULT_LOCATION.to_string());
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let load = {
        let data = data.clone();
        let loading = loading.clone();
        let error = error.clone();

        Callback::from(move |loc: String| {
            let data = data.clone();
            let loading = loading.clone();
            let error = error.clone();

            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = get_environmental_data(&loc).await;
                let (next_data, next_error) = load_outcome(result, (*data).clone());
                data.set(next_data);
                error.set(next_error);
                loading.set(false);
            });
        })
    };

    // Populate the initial view for the default location.
    {
        let load = load.clone();
        let location = location.clone();
        use_effect_with((), move |_| {
            load.emit((*location).clone());
            || ()
        });
    }

    let on_load = {
        let load = load.clone();
        let location = location.clone();
        Callback::from(move |_| load.emit((*location).clone()))
    };

    let on_select_feature = {
        let selected_feature = selected_feature.clone();
        Callback::from(move |feature: Feature| {
            log::debug!("Feature selected: {:?}", feature);
            selected_feature.set(feature);
        })
    };

    let on_select_trend = {
        let load = load.clone();
        let location = location.clone();
        Callback::from(move |period: TrendPeriod| {
            // Aggregation is not implemented; the period is recorded and the
            // raw data is simply re-fetched.
            log::info!("Trend period selected: {}", period);
            load.emit((*location).clone());
        })
    };

    let on_change_location = {
        let location = location.clone();
        Callback::from(move |loc: String| location.set(loc))
    };

    let on_save_threshold = {
        let error = error.clone();
        Callback::from(move |raw: String| match parse_threshold(&raw) {
            Ok(value) => {
                log::info!("Threshold set to: {}", value);
                error.set(None);
            }
            Err(e) => {
                log::error!("{} (input: {:?})", e, raw);
                error.set(Some(e.to_string()));
            }
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Environmental Readings"}</h2>

                <div class="flex flex-wrap items-center gap-4">
                    <LocationPicker
                        selected={(*location).clone()}
                        on_change={on_change_location}
                    />
                    <button class="btn btn-sm btn-primary" onclick={on_load}>
                        {"Load Data"}
                    </button>
                    <FeatureSelector
                        selected={*selected_feature}
                        on_select={on_select_feature}
                    />
                    <TrendSelector on_select={on_select_trend} />
                </div>

                <ErrorBanner message={(*error).clone()} />

                { if *loading {
                    html! { <LoadingSpinner /> }
                } else {
                    html! {}
                }}

                { match &*data {
                    Some(envelope) if !envelope.is_empty() => html! {
                        <SensorChart data={envelope.clone()} feature={*selected_feature} />
                    },
                    Some(_) => html! {
                        <div class="text-center py-8 text-gray-500">
                            <p>{"No readings available for this location."}</p>
                        </div>
                    },
                    None => html! {},
                }}

                <ThresholdControl on_save={on_save_threshold} />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_envelope() -> EnvironmentalData {
        EnvironmentalData {
            timestamp: vec!["t1".to_string(), "t2".to_string()],
            air_quality_index: vec![1.0, 2.0],
            temperature: vec![10.0, 20.0],
            humidity: vec![50.0, 60.0],
        }
    }

    #[test]
    fn test_successful_load_replaces_envelope_and_clears_banner() {
        let fresh = sample_envelope();
        let stale = EnvironmentalData {
            timestamp: vec!["old".to_string()],
            air_quality_index: vec![99.0],
            temperature: vec![5.0],
            humidity: vec![40.0],
        };

        let (data, banner) = load_outcome(Ok(fresh.clone()), Some(stale));
        assert_eq!(data, Some(fresh));
        assert_eq!(banner, None);
    }

    #[test]
    fn test_failed_load_keeps_previous_envelope_and_raises_banner() {
        let stale = sample_envelope();

        let (data, banner) = load_outcome(
            Err(ApiError::Http { status: 500 }),
            Some(stale.clone()),
        );
        assert_eq!(data, Some(stale));
        assert_eq!(banner, Some(LOAD_FAILED_MESSAGE.to_string()));
    }

    #[test]
    fn test_failed_initial_load_has_no_envelope() {
        let (data, banner) = load_outcome(Err(ApiError::Request("refused".to_string())), None);
        assert_eq!(data, None);
        assert_eq!(banner, Some(LOAD_FAILED_MESSAGE.to_string()));
    }
}
