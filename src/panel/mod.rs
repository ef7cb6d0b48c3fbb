//! Panel: the user-facing side of the client.
//!
//! `Panel` owns the sync controller, the localization store, the dialog
//! state and the current toast. Rendering it is pure; `console` turns the
//! rendered strings into terminal output and `runtime` drives everything.

pub mod command;
pub mod console;
pub mod render;
pub mod runtime;
pub mod toast;
pub mod view;

pub use command::{Command, CommandError, parse_command};
pub use console::{ConsoleView, PanelView};
pub use render::{RenderedDialog, RenderedPanel};
pub use runtime::{PanelEvent, PanelRuntime, RuntimeTimings};
pub use toast::{Toast, ToastCenter, ToastId, ToastKind};
pub use view::{
    BoilerState, MAX_TARGET_C, MIN_TARGET_C, ShowerPreview, StatusView, TemperatureDialog,
    TemperatureSelection, ToggleAction,
};

use crate::api::BoilerApi;
use crate::i18n::LocalizationStore;
use crate::persistence::PreferenceStore;
use crate::status::StatusSyncController;

pub struct Panel {
    controller: StatusSyncController,
    i18n: LocalizationStore,
    dialog: Option<TemperatureDialog>,
    toasts: ToastCenter,
}

impl Panel {
    pub fn new(i18n: LocalizationStore) -> Self {
        Self {
            controller: StatusSyncController::new(),
            i18n,
            dialog: None,
            toasts: ToastCenter::new(),
        }
    }

    pub fn controller(&self) -> &StatusSyncController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut StatusSyncController {
        &mut self.controller
    }

    pub fn i18n(&self) -> &LocalizationStore {
        &self.i18n
    }

    pub fn i18n_mut(&mut self) -> &mut LocalizationStore {
        &mut self.i18n
    }

    pub fn dialog(&self) -> Option<&TemperatureDialog> {
        self.dialog.as_ref()
    }

    /// Open the temperature dialog with no selection; keeps an open one as is
    pub fn open_dialog(&mut self) {
        self.dialog.get_or_insert_with(TemperatureDialog::default);
    }

    /// Select a temperature, opening the dialog if needed
    pub fn select_temperature(&mut self, selection: TemperatureSelection) {
        self.dialog.get_or_insert_with(TemperatureDialog::default).selection = Some(selection);
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toasts.visible()
    }

    pub fn toasts_mut(&mut self) -> &mut ToastCenter {
        &mut self.toasts
    }

    pub fn render(&self) -> RenderedPanel {
        render::render(self)
    }
}

/// Load translations and resolve the language preference before the first
/// render, so the panel never shows a flash of the wrong language.
pub async fn build_panel(
    api: &dyn BoilerApi,
    prefs: Box<dyn PreferenceStore>,
    default_language: &str,
) -> Panel {
    let mut i18n = LocalizationStore::new(prefs);
    i18n.load(api).await;
    i18n.resolve_preference(default_language);
    Panel::new(i18n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryPreferences;
    use crate::status::StatusSnapshot;

    fn panel() -> Panel {
        Panel::new(LocalizationStore::new(Box::new(MemoryPreferences::new())))
    }

    #[test]
    fn initial_render_is_placeholder() {
        let rendered = panel().render();
        assert_eq!(rendered.title, "Water Boiler Control");
        assert_eq!(rendered.temperature, "Water Temperature: --°C");
        assert_eq!(rendered.last_update, "Last Update: --");
        assert_eq!(rendered.status, "Boiler Status: Unknown");
        assert_eq!(rendered.toggle_action, "Turn On");
        assert!(rendered.gauge.is_none());
        assert!(rendered.dialog.is_none());
    }

    #[test]
    fn heating_snapshot_renders_estimate() {
        let mut panel = panel();
        let ticket = panel.controller_mut().begin_refresh();
        panel.controller_mut().complete_refresh(
            ticket,
            Ok(StatusSnapshot {
                current_temp: Some(52.5),
                boiler_on: true,
                target_temp: Some(60.0),
                expected_end_time: Some("14:35".to_string()),
                ..Default::default()
            }),
        );
        let rendered = panel.render();
        assert_eq!(rendered.temperature, "Water Temperature: 52.5°C");
        assert_eq!(rendered.status, "Boiler Status: ON (Estimated ready: 14:35)");
        assert_eq!(rendered.target, "Target: 60°C");
        assert_eq!(rendered.toggle_action, "Turn Off");
        assert_eq!(rendered.showers, "No showers available");
    }

    #[test]
    fn dialog_prompts_until_selection() {
        let mut panel = panel();
        panel.open_dialog();
        let dialog = panel.render().dialog.unwrap();
        assert_eq!(dialog.selection, "--°C");
        assert_eq!(dialog.range, "37-80°C");

        panel.select_temperature(TemperatureSelection::new(55).unwrap());
        let dialog = panel.render().dialog.unwrap();
        assert_eq!(dialog.selection, "55°C");
        // no shower data yet
        assert_eq!(dialog.info, "Select a temperature to see shower availability");

        panel.close_dialog();
        assert!(panel.render().dialog.is_none());
    }
}
