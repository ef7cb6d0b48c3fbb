//! Wire types for the boiler backend
//!
//! These mirror the JSON documents exchanged with the backend. Parsing is
//! lenient about numbers: the backend relays values from the appliance vendor
//! which are sometimes encoded as strings.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `GET /api/status`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default, deserialize_with = "lenient_opt_number")]
    pub current_temp: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub boiler_status: bool,
    #[serde(default, deserialize_with = "lenient_opt_number")]
    pub target_temp: Option<f64>,
    #[serde(default)]
    pub expected_end_time: Option<String>,
    #[serde(default)]
    pub last_update: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shower_data: Vec<ShowerLevelDto>,
}

/// One `shower_data` entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShowerLevelDto {
    #[serde(deserialize_with = "lenient_number")]
    pub temp: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub drop: f64,
}

/// Body of `POST /api/boiler/toggle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleRequest {
    /// `None` turns the boiler off
    pub target_temp: Option<u8>,
}

/// Response of `POST /api/boiler/toggle`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, alias = "expectedEndTime")]
    pub expected_end_time: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("not a number: {:?}", s))),
    }
}

fn lenient_opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("not a number: {:?}", s))),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
