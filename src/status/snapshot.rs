use chrono::{DateTime, Local, NaiveDateTime};

use crate::api::types::{ShowerLevelDto, StatusResponse};

/// Lower bound of the gauge scale in °C
pub const GAUGE_MIN_C: f64 = 30.0;
/// Upper bound of the gauge scale in °C
pub const GAUGE_MAX_C: f64 = 75.0;

/// How many showers can run concurrently at a delivered temperature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowerLevel {
    pub temp: f64,
    pub drop: u32,
}

impl From<ShowerLevelDto> for ShowerLevel {
    fn from(dto: ShowerLevelDto) -> Self {
        let drop = if dto.drop.is_finite() && dto.drop > 0.0 {
            dto.drop.round() as u32
        } else {
            0
        };
        Self {
            temp: dto.temp,
            drop,
        }
    }
}

/// One complete read of appliance state. Never patched in place; the next
/// snapshot replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusSnapshot {
    pub current_temp: Option<f64>,
    pub boiler_on: bool,
    pub target_temp: Option<f64>,
    pub expected_end_time: Option<String>,
    pub shower_availability: Vec<ShowerLevel>,
    /// Backend update time in local wall-clock time
    pub last_update: Option<NaiveDateTime>,
}

impl StatusSnapshot {
    /// Estimated ready time, only while the boiler is heating toward it
    pub fn active_estimate(&self) -> Option<&str> {
        if !self.boiler_on {
            return None;
        }
        self.expected_end_time
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

impl From<StatusResponse> for StatusSnapshot {
    fn from(resp: StatusResponse) -> Self {
        Self {
            current_temp: resp.current_temp.filter(|t| t.is_finite()),
            boiler_on: resp.boiler_status,
            target_temp: resp.target_temp.filter(|t| t.is_finite()),
            expected_end_time: resp.expected_end_time,
            shower_availability: resp.shower_data.into_iter().map(Into::into).collect(),
            last_update: resp.last_update.as_deref().and_then(parse_update_time),
        }
    }
}

/// Parse the backend's ISO timestamp. Timestamps with an offset are converted
/// to local time; naive ones are taken as local already.
pub fn parse_update_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Last validated gauge value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeReading {
    pub celsius: f64,
}

impl GaugeReading {
    pub fn new(celsius: f64) -> Self {
        Self { celsius }
    }

    /// Span of the gauge in degrees
    pub fn scale() -> f64 {
        GAUGE_MAX_C - GAUGE_MIN_C
    }

    /// Filled portion of the gauge, in degrees above its lower bound
    pub fn filled(&self) -> f64 {
        self.celsius.clamp(GAUGE_MIN_C, GAUGE_MAX_C) - GAUGE_MIN_C
    }

    /// Filled fraction in `0.0..=1.0`
    pub fn fraction(&self) -> f64 {
        self.filled() / Self::scale()
    }
}
