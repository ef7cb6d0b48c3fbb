//! Language-independent view model derived from the controller state.

use chrono::NaiveDateTime;

use crate::error::{PanelError, Result};
use crate::status::{GaugeReading, StatusSyncController};

/// Lowest target temperature the boiler accepts, °C
pub const MIN_TARGET_C: u8 = 37;
/// Highest target temperature the boiler accepts, °C
pub const MAX_TARGET_C: u8 = 80;

/// A target temperature that passed range validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureSelection(u8);

impl TemperatureSelection {
    pub fn new(celsius: i64) -> Result<Self> {
        if !(i64::from(MIN_TARGET_C)..=i64::from(MAX_TARGET_C)).contains(&celsius) {
            return Err(PanelError::validation(
                "target_temp",
                format!(
                    "{} is outside {}..={}",
                    celsius, MIN_TARGET_C, MAX_TARGET_C
                ),
            ));
        }
        u8::try_from(celsius)
            .map(Self)
            .map_err(|_| PanelError::validation("target_temp", "out of range"))
    }

    pub fn celsius(self) -> u8 {
        self.0
    }
}

/// State of the temperature selection dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemperatureDialog {
    pub selection: Option<TemperatureSelection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoilerState {
    /// No snapshot received yet
    Unknown,
    Off,
    On { estimate: Option<String> },
}

impl BoilerState {
    pub fn is_on(&self) -> bool {
        matches!(self, Self::On { .. })
    }
}

/// What the toggle control does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    TurnOn,
    TurnOff,
}

/// Everything the status area shows, before translation
#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub current_temp: Option<f64>,
    pub last_update: Option<NaiveDateTime>,
    pub boiler: BoilerState,
    pub target_temp: Option<f64>,
    pub gauge: Option<GaugeReading>,
    pub showers: Option<u32>,
}

impl StatusView {
    pub fn derive(controller: &StatusSyncController) -> Self {
        let Some(snapshot) = controller.snapshot() else {
            return Self {
                current_temp: None,
                last_update: None,
                boiler: BoilerState::Unknown,
                target_temp: None,
                gauge: controller.gauge(),
                showers: None,
            };
        };

        let boiler = if snapshot.boiler_on {
            BoilerState::On {
                estimate: snapshot.active_estimate().map(str::to_string),
            }
        } else {
            BoilerState::Off
        };

        Self {
            current_temp: snapshot.current_temp,
            last_update: snapshot.last_update,
            boiler,
            target_temp: snapshot.target_temp,
            gauge: controller.gauge(),
            showers: controller.current_showers(),
        }
    }

    pub fn toggle_action(&self) -> ToggleAction {
        if self.boiler.is_on() {
            ToggleAction::TurnOff
        } else {
            ToggleAction::TurnOn
        }
    }
}

/// What-if shower readout inside the dialog, before translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowerPreview {
    /// No selection or no shower data
    Prompt,
    Available { count: u32, temp: u8 },
    Unavailable { temp: u8 },
}

impl ShowerPreview {
    pub fn derive(controller: &StatusSyncController, dialog: &TemperatureDialog) -> Self {
        let Some(selection) = dialog.selection else {
            return Self::Prompt;
        };
        let temp = selection.celsius();
        match controller.showers_at(f64::from(temp)) {
            None => Self::Prompt,
            Some(0) => Self::Unavailable { temp },
            Some(count) => Self::Available { count, temp },
        }
    }
}

/// `55°C`, `47.5°C` or `--°C`
pub fn format_celsius(temp: Option<f64>) -> String {
    match temp {
        Some(t) => format!("{}°C", t),
        None => "--°C".to_string(),
    }
}
