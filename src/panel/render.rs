//! Language + view model -> display strings.
//!
//! Rendering is a pure function of the panel state, so switching language
//! simply renders again from the same snapshot.

use crate::i18n::keys;
use crate::i18n::{LocalizationStore, TextDirection};
use crate::status::GaugeReading;

use super::Panel;
use super::view::{
    BoilerState, MAX_TARGET_C, MIN_TARGET_C, ShowerPreview, StatusView, ToggleAction,
    format_celsius,
};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDialog {
    pub title: String,
    pub label: String,
    pub selection: String,
    pub range: String,
    pub info: String,
    pub confirm: String,
    pub cancel: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPanel {
    pub direction: TextDirection,
    pub language: String,
    pub title: String,
    pub temperature: String,
    /// Gauge fill in `0.0..=1.0`; `None` until a temperature was seen
    pub gauge: Option<f64>,
    pub last_update: String,
    pub status: String,
    pub target: String,
    pub showers: String,
    pub toggle_action: String,
    pub refresh_action: String,
    pub dialog: Option<RenderedDialog>,
    pub toast: Option<String>,
}

pub fn render(panel: &Panel) -> RenderedPanel {
    let i18n = panel.i18n();
    let view = StatusView::derive(panel.controller());

    let language_name = i18n
        .languages()
        .into_iter()
        .find(|(code, _)| code == i18n.current_language())
        .map(|(_, name)| name)
        .unwrap_or_else(|| i18n.current_language().to_string());

    RenderedPanel {
        direction: i18n.direction(),
        language: labelled(i18n, keys::LANGUAGE, &language_name),
        title: i18n.t(keys::TITLE),
        temperature: labelled(
            i18n,
            keys::CURRENT_TEMPERATURE,
            &format_celsius(view.current_temp),
        ),
        gauge: view.gauge.map(|g: GaugeReading| g.fraction()),
        last_update: labelled(
            i18n,
            keys::LAST_UPDATE,
            &view
                .last_update
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "--".to_string()),
        ),
        status: labelled(i18n, keys::BOILER_STATUS, &status_text(i18n, &view.boiler)),
        target: labelled(
            i18n,
            keys::TARGET,
            &format_celsius(view.target_temp.filter(|_| view.boiler != BoilerState::Unknown)),
        ),
        showers: showers_text(i18n, view.showers),
        toggle_action: match view.toggle_action() {
            ToggleAction::TurnOn => i18n.t(keys::TURN_ON),
            ToggleAction::TurnOff => i18n.t(keys::TURN_OFF),
        },
        refresh_action: i18n.t(keys::REFRESH),
        dialog: panel.dialog().map(|dialog| {
            let preview = ShowerPreview::derive(panel.controller(), dialog);
            RenderedDialog {
                title: i18n.t(keys::SET_TEMPERATURE),
                label: format!("{}:", i18n.t(keys::SELECT_TEMPERATURE)),
                selection: dialog
                    .selection
                    .map(|s| format_celsius(Some(f64::from(s.celsius()))))
                    .unwrap_or_else(|| "--°C".to_string()),
                range: format!("{}-{}°C", MIN_TARGET_C, MAX_TARGET_C),
                info: preview_text(i18n, preview),
                confirm: i18n.t(keys::START_BOILER),
                cancel: i18n.t(keys::CANCEL),
            }
        }),
        toast: panel.toast().map(|t| t.message.clone()),
    }
}

fn labelled(i18n: &LocalizationStore, key: &str, value: &str) -> String {
    format!("{}: {}", i18n.t(key), value)
}

/// `ON`, `OFF`, `ON (Estimated ready: 14:35)` or `Unknown`
pub fn status_text(i18n: &LocalizationStore, boiler: &BoilerState) -> String {
    match boiler {
        BoilerState::Unknown => i18n.t(keys::UNKNOWN),
        BoilerState::Off => i18n.t(keys::OFF),
        BoilerState::On { estimate: None } => i18n.t(keys::ON),
        BoilerState::On {
            estimate: Some(time),
        } => format!(
            "{} ({} {})",
            i18n.t(keys::ON),
            i18n.t(keys::ESTIMATED_READY),
            time
        ),
    }
}

/// Live shower readout at the current water temperature
pub fn showers_text(i18n: &LocalizationStore, showers: Option<u32>) -> String {
    match showers {
        None => i18n.t(keys::UNKNOWN),
        Some(0) => i18n.t(keys::NO_SHOWERS),
        Some(count) => i18n.translate(keys::SHOWERS_AVAILABLE, &[("count", count.to_string())]),
    }
}

/// What-if readout inside the temperature dialog
pub fn preview_text(i18n: &LocalizationStore, preview: ShowerPreview) -> String {
    match preview {
        ShowerPreview::Prompt => i18n.t(keys::SELECT_TO_SEE),
        ShowerPreview::Available { count, temp } => i18n.translate(
            keys::SHOWERS_AT_TEMP,
            &[("count", count.to_string()), ("temp", temp.to_string())],
        ),
        ShowerPreview::Unavailable { temp } => {
            i18n.translate(keys::NO_SHOWERS_AT_TEMP, &[("temp", temp.to_string())])
        }
    }
}
