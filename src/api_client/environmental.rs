use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api_client::{self, ApiError};

/// The envelope returned by `/environmental_data`: four parallel sequences,
/// index i across all of them refers to the same sample instant. The backend
/// guarantees equal lengths; the client does not enforce it (a mismatch is
/// only logged, see [`get_environmental_data`]).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvironmentalData {
    pub timestamp: Vec<String>,
    pub air_quality_index: Vec<f64>,
    pub temperature: Vec<f64>,
    pub humidity: Vec<f64>,
}

impl EnvironmentalData {
    /// Number of samples, as defined by the shared x-axis.
    pub fn len(&self) -> usize {
        self.timestamp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamp.is_empty()
    }

    /// True when all three measurement series match the timestamp length.
    pub fn is_aligned(&self) -> bool {
        let n = self.timestamp.len();
        self.air_quality_index.len() == n
            && self.temperature.len() == n
            && self.humidity.len() == n
    }
}

/// One of the three measurable series in the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feature {
    #[default]
    AirQualityIndex,
    Temperature,
    Humidity,
}

impl Feature {
    pub const ALL: [Feature; 3] = [
        Feature::AirQualityIndex,
        Feature::Temperature,
        Feature::Humidity,
    ];

    /// Series label as shown in the legend and tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::AirQualityIndex => "Air Quality Index",
            Feature::Temperature => "Temperature (°C)",
            Feature::Humidity => "Humidity (%)",
        }
    }

    pub fn line_color(&self) -> &'static str {
        match self {
            Feature::AirQualityIndex => "blue",
            Feature::Temperature => "orange",
            Feature::Humidity => "green",
        }
    }

    /// The measurement sequence for this feature.
    pub fn series<'a>(&self, data: &'a EnvironmentalData) -> &'a [f64] {
        match self {
            Feature::AirQualityIndex => &data.air_quality_index,
            Feature::Temperature => &data.temperature,
            Feature::Humidity => &data.humidity,
        }
    }
}

/// Requested trend aggregation. Selecting a period currently just re-fetches
/// the raw data for the active location; the backend query is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendPeriod {
    Monthly,
    Daily,
    Weekly,
}

impl TrendPeriod {
    pub const ALL: [TrendPeriod; 3] =
        [TrendPeriod::Monthly, TrendPeriod::Daily, TrendPeriod::Weekly];

    pub fn label(&self) -> &'static str {
        match self {
            TrendPeriod::Monthly => "Monthly",
            TrendPeriod::Daily => "Daily",
            TrendPeriod::Weekly => "Weekly",
        }
    }
}

impl fmt::Display for TrendPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn environmental_data_endpoint(location: &str) -> String {
    format!("/environmental_data?location={}", location)
}

pub async fn get_environmental_data(location: &str) -> Result<EnvironmentalData, ApiError> {
    log::trace!("Fetching environmental data for location: {}", location);

    let endpoint = environmental_data_endpoint(location);
    let result = api_client::get::<EnvironmentalData>(&endpoint).await;

    match &result {
        Ok(data) => {
            if !data.is_aligned() {
                log::warn!(
                    "Envelope for location {} has mismatched series lengths \
                     (timestamp={}, aqi={}, temperature={}, humidity={})",
                    location,
                    data.timestamp.len(),
                    data.air_quality_index.len(),
                    data.temperature.len(),
                    data.humidity.len()
                );
            }
            log::info!(
                "Successfully fetched {} samples for location: {}",
                data.len(),
                location
            );
        }
        Err(e) => log::error!("Failed to fetch environmental data: {}", e),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_deserialization() {
        let body = r#"{"air_quality_index":[1,2],"timestamp":["t1","t2"],"temperature":[10,20],"humidity":[50,60]}"#;
        let data: EnvironmentalData = serde_json::from_str(body).unwrap();

        assert_eq!(data.len(), 2);
        assert!(data.is_aligned());
        assert_eq!(data.timestamp, vec!["t1", "t2"]);
        assert_eq!(data.air_quality_index, vec![1.0, 2.0]);
        assert_eq!(data.temperature, vec![10.0, 20.0]);
        assert_eq!(data.humidity, vec![50.0, 60.0]);
    }

    #[test]
    fn test_envelope_deserialization_rejects_non_numeric_samples() {
        let body = r#"{"air_quality_index":["high"],"timestamp":["t1"],"temperature":[10],"humidity":[50]}"#;
        assert!(serde_json::from_str::<EnvironmentalData>(body).is_err());
    }

    #[test]
    fn test_misaligned_envelope_is_detected() {
        let data = EnvironmentalData {
            timestamp: vec!["t1".to_string(), "t2".to_string()],
            air_quality_index: vec![1.0],
            temperature: vec![10.0, 20.0],
            humidity: vec![50.0, 60.0],
        };
        assert!(!data.is_aligned());
        // len() follows the x-axis regardless
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_feature_series_selection() {
        let data = EnvironmentalData {
            timestamp: vec!["t1".to_string()],
            air_quality_index: vec![42.0],
            temperature: vec![21.5],
            humidity: vec![65.0],
        };
        assert_eq!(Feature::AirQualityIndex.series(&data), &[42.0]);
        assert_eq!(Feature::Temperature.series(&data), &[21.5]);
        assert_eq!(Feature::Humidity.series(&data), &[65.0]);
    }

    #[test]
    fn test_default_feature_is_air_quality() {
        assert_eq!(Feature::default(), Feature::AirQualityIndex);
    }

    #[test]
    fn test_endpoint_construction() {
        assert_eq!(
            environmental_data_endpoint("location2"),
            "/environmental_data?location=location2"
        );
    }

    #[test]
    fn test_trend_period_labels() {
        assert_eq!(TrendPeriod::Monthly.to_string(), "Monthly");
        assert_eq!(TrendPeriod::Daily.to_string(), "Daily");
        assert_eq!(TrendPeriod::Weekly.to_string(), "Weekly");
    }
}
