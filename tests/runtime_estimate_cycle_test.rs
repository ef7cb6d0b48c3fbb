use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use boiler_panel::api::{BoilerApi, ToggleResponse};
use boiler_panel::error::{PanelError, Result};
use boiler_panel::i18n::{LocalizationStore, TranslationTable};
use boiler_panel::panel::{Panel, PanelRuntime, PanelView, RenderedPanel, RuntimeTimings};
use boiler_panel::persistence::MemoryPreferences;
use boiler_panel::status::StatusSnapshot;
use tokio::sync::mpsc;
use tokio::time::sleep;

/// Backend stub: the n-th status fetch (1-based) returns `status(n)`
struct ScriptedApi {
    fetches: AtomicUsize,
    toggles: AtomicUsize,
    status: fn(usize) -> StatusSnapshot,
    toggle: fn() -> Result<ToggleResponse>,
}

#[async_trait]
impl BoilerApi for ScriptedApi {
    async fn fetch_status(&self) -> Result<StatusSnapshot> {
        let n = self.fetches.fetch_add(1, Ordering::SeqCst) + 1;
        Ok((self.status)(n))
    }

    async fn toggle(&self, _target_temp: Option<u8>) -> Result<ToggleResponse> {
        self.toggles.fetch_add(1, Ordering::SeqCst);
        (self.toggle)()
    }

    async fn fetch_languages(&self) -> Result<TranslationTable> {
        Err(PanelError::network("not used"))
    }
}

#[derive(Clone, Default)]
struct RecordingView {
    frames: Arc<Mutex<Vec<RenderedPanel>>>,
    notices: Arc<Mutex<Vec<String>>>,
}

impl PanelView for RecordingView {
    fn render(&mut self, panel: &RenderedPanel) -> Result<()> {
        self.frames.lock().unwrap().push(panel.clone());
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        self.notices.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

fn heating(estimate: Option<&str>) -> StatusSnapshot {
    StatusSnapshot {
        current_temp: Some(45.0),
        boiler_on: true,
        target_temp: Some(60.0),
        expected_end_time: estimate.map(str::to_string),
        ..Default::default()
    }
}

fn idle() -> StatusSnapshot {
    StatusSnapshot {
        current_temp: Some(40.0),
        boiler_on: false,
        ..Default::default()
    }
}

fn started() -> Result<ToggleResponse> {
    Ok(ToggleResponse {
        success: true,
        expected_end_time: Some("15:10".to_string()),
        error: None,
    })
}

/// Hebrew strings for the toggle feedback; English is filled in from the
/// built-in table
fn hebrew_table() -> TranslationTable {
    let mut table = TranslationTable::new();
    table.insert(
        "he".to_string(),
        BTreeMap::from([
            ("languageName".to_string(), "עברית".to_string()),
            ("toggleFailed".to_string(), "הפעלת הדוד נכשלה".to_string()),
            ("boilerAlreadyOn".to_string(), "הדוד כבר פועל".to_string()),
        ]),
    );
    table
}

fn timings() -> RuntimeTimings {
    RuntimeTimings {
        base_interval: Duration::from_secs(3600),
        estimate_interval: Duration::from_secs(240),
        toast_delay: Duration::from_millis(100),
        toast_duration: Duration::from_secs(5),
    }
}

struct Harness {
    api: Arc<ScriptedApi>,
    view: RecordingView,
    commands: mpsc::UnboundedSender<String>,
    task: tokio::task::JoinHandle<PanelRuntime<RecordingView>>,
}

fn start(status: fn(usize) -> StatusSnapshot, toggle: fn() -> Result<ToggleResponse>) -> Harness {
    let api = Arc::new(ScriptedApi {
        fetches: AtomicUsize::new(0),
        toggles: AtomicUsize::new(0),
        status,
        toggle,
    });
    let view = RecordingView::default();
    let panel = Panel::new(LocalizationStore::with_table(
        hebrew_table(),
        Box::new(MemoryPreferences::new()),
    ));
    let mut runtime = PanelRuntime::new(
        panel,
        Arc::clone(&api) as Arc<dyn BoilerApi>,
        view.clone(),
        timings(),
    );
    let (commands, rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(async move {
        runtime.run(rx).await.unwrap();
        runtime
    });
    Harness {
        api,
        view,
        commands,
        task,
    }
}

impl Harness {
    fn fetches(&self) -> usize {
        self.api.fetches.load(Ordering::SeqCst)
    }

    fn toasts(&self) -> Vec<String> {
        self.view
            .frames
            .lock()
            .unwrap()
            .iter()
            .filter_map(|f| f.toast.clone())
            .collect()
    }

    fn last_frame(&self) -> RenderedPanel {
        self.view.frames.lock().unwrap().last().cloned().unwrap()
    }

    async fn quit(self) -> PanelRuntime<RecordingView> {
        self.commands.send("quit".to_string()).unwrap();
        self.task.await.unwrap()
    }
}

#[tokio::test(start_paused = true)]
async fn estimate_timer_runs_until_estimate_clears() {
    let h = start(
        |n| heating(if n == 1 { Some("14:35") } else { None }),
        started,
    );

    sleep(Duration::from_secs(10)).await;
    assert_eq!(h.fetches(), 1);
    assert_eq!(
        h.last_frame().status,
        "Boiler Status: ON (Estimated ready: 14:35)"
    );

    sleep(Duration::from_secs(240)).await;
    assert_eq!(h.fetches(), 2);
    assert_eq!(h.last_frame().status, "Boiler Status: ON");

    // disarmed: nothing until the base interval
    sleep(Duration::from_secs(1000)).await;
    assert_eq!(h.fetches(), 2);

    let runtime = h.quit().await;
    assert!(!runtime.estimate_timer_armed());
    assert!(!runtime.panel().controller().polling().refresh_timer_active);
}

#[tokio::test(start_paused = true)]
async fn estimate_timer_keeps_running_while_pending() {
    let h = start(|_| heating(Some("14:35")), started);

    sleep(Duration::from_secs(10)).await;
    assert_eq!(h.fetches(), 1);
    sleep(Duration::from_secs(240)).await;
    assert_eq!(h.fetches(), 2);
    sleep(Duration::from_secs(240)).await;
    assert_eq!(h.fetches(), 3);

    let runtime = h.quit().await;
    assert!(runtime.estimate_timer_armed());
}

#[tokio::test(start_paused = true)]
async fn restart_rearms_a_single_timer() {
    // heating, then off after the stop, then heating again after the start
    let h = start(
        |n| match n {
            2 => idle(),
            _ => heating(Some("14:35")),
        },
        started,
    );

    sleep(Duration::from_secs(100)).await;
    assert_eq!(h.fetches(), 1);

    h.commands.send("off".to_string()).unwrap();
    sleep(Duration::from_secs(1)).await;
    assert_eq!(h.fetches(), 2);
    assert!(h.toasts().is_empty());

    h.commands.send("on 60".to_string()).unwrap();
    sleep(Duration::from_secs(1)).await;
    assert_eq!(h.api.toggles.load(Ordering::SeqCst), 2);
    // the successful toggle triggers a refresh
    assert_eq!(h.fetches(), 3);
    assert_eq!(
        h.toasts().last().map(String::as_str),
        Some("Boiler started! Estimated ready time: 15:10")
    );

    // the timer armed at t=0 would have fired at t=240
    sleep(Duration::from_secs(200)).await;
    assert_eq!(h.fetches(), 3);

    // the new one, armed at t=101, fires at t=341
    sleep(Duration::from_secs(50)).await;
    assert_eq!(h.fetches(), 4);

    // toast is long gone
    assert!(h.last_frame().toast.is_none());
    let runtime = h.quit().await;
    assert!(runtime.estimate_timer_armed());
}

#[tokio::test(start_paused = true)]
async fn failed_toggle_shows_error_without_refresh() {
    let h = start(|_| idle(), || Err(PanelError::network("refused")));

    sleep(Duration::from_secs(1)).await;
    h.commands.send("on 55".to_string()).unwrap();
    sleep(Duration::from_secs(1)).await;

    assert_eq!(h.fetches(), 1);
    assert_eq!(
        h.toasts().last().map(String::as_str),
        Some("Error communicating with server")
    );
    h.quit().await;
}

#[tokio::test(start_paused = true)]
async fn rejected_toggle_shows_backend_message() {
    let h = start(
        |_| heating(None),
        || {
            Ok(ToggleResponse {
                success: false,
                expected_end_time: None,
                error: Some("Boiler is offline".to_string()),
            })
        },
    );

    sleep(Duration::from_secs(1)).await;
    h.commands.send("off".to_string()).unwrap();
    sleep(Duration::from_secs(1)).await;

    assert_eq!(h.fetches(), 1);
    assert_eq!(
        h.toasts().last().map(String::as_str),
        Some("Boiler is offline")
    );
    h.quit().await;
}

#[tokio::test(start_paused = true)]
async fn invalid_temperature_never_reaches_backend() {
    let h = start(|_| heating(None), started);

    sleep(Duration::from_secs(1)).await;
    h.commands.send("on 95".to_string()).unwrap();
    h.commands.send("dance".to_string()).unwrap();
    sleep(Duration::from_secs(1)).await;

    assert_eq!(h.api.toggles.load(Ordering::SeqCst), 0);
    let notices = h.view.notices.lock().unwrap().clone();
    assert_eq!(
        notices,
        vec![
            "Please select a valid temperature between 37°C and 80°C".to_string(),
            "Unknown command: dance".to_string(),
        ]
    );
    h.quit().await;
}

#[tokio::test(start_paused = true)]
async fn dialog_opens_with_fresh_data_and_previews() {
    let h = start(
        |_| StatusSnapshot {
            current_temp: Some(45.0),
            shower_availability: vec![boiler_panel::status::ShowerLevel {
                temp: 40.0,
                drop: 2,
            }],
            ..Default::default()
        },
        started,
    );

    sleep(Duration::from_secs(1)).await;
    h.commands.send("toggle".to_string()).unwrap();
    sleep(Duration::from_secs(1)).await;
    assert_eq!(h.fetches(), 2);
    assert!(h.last_frame().dialog.is_some());

    h.commands.send("preview 55".to_string()).unwrap();
    sleep(Duration::from_secs(1)).await;
    let dialog = h.last_frame().dialog.unwrap();
    assert_eq!(dialog.info, "2 shower(s) available at 55°C");

    h.commands.send("cancel".to_string()).unwrap();
    sleep(Duration::from_secs(1)).await;
    assert!(h.last_frame().dialog.is_none());
    assert_eq!(h.api.toggles.load(Ordering::SeqCst), 0);
    h.quit().await;
}

#[tokio::test(start_paused = true)]
async fn closed_command_input_keeps_polling() {
    let h = start(|_| heating(None), started);
    sleep(Duration::from_secs(1)).await;
    assert_eq!(h.fetches(), 1);

    let Harness {
        api, commands, task, ..
    } = h;
    drop(commands);
    sleep(Duration::from_secs(3600)).await;
    assert_eq!(api.fetches.load(Ordering::SeqCst), 2);
    assert!(!task.is_finished());

    task.abort();
}

#[tokio::test(start_paused = true)]
async fn turn_on_while_heating_is_refused_locally() {
    let h = start(|_| heating(None), started);

    sleep(Duration::from_secs(1)).await;
    h.commands.send("on 55".to_string()).unwrap();
    sleep(Duration::from_secs(1)).await;

    assert_eq!(h.api.toggles.load(Ordering::SeqCst), 0);
    assert!(h.toasts().is_empty());
    assert_eq!(
        h.view.notices.lock().unwrap().clone(),
        vec!["Boiler is already on".to_string()]
    );
    h.quit().await;
}

#[tokio::test(start_paused = true)]
async fn start_without_estimate_refreshes_silently() {
    let h = start(
        |_| StatusSnapshot {
            current_temp: Some(40.0),
            ..Default::default()
        },
        || {
            Ok(ToggleResponse {
                success: true,
                ..Default::default()
            })
        },
    );

    sleep(Duration::from_secs(1)).await;
    h.commands.send("on 55".to_string()).unwrap();
    sleep(Duration::from_secs(1)).await;

    assert_eq!(h.api.toggles.load(Ordering::SeqCst), 1);
    assert_eq!(h.fetches(), 2);
    assert!(h.toasts().is_empty());

    let runtime = h.quit().await;
    assert!(!runtime.estimate_timer_armed());
}

#[tokio::test(start_paused = true)]
async fn toggle_error_page_shows_localized_failure() {
    let h = start(
        |_| StatusSnapshot::default(),
        || {
            Err(PanelError::api(
                "Toggle request returned 500 Internal Server Error",
            ))
        },
    );

    sleep(Duration::from_secs(1)).await;
    h.commands.send("lang he".to_string()).unwrap();
    h.commands.send("on 55".to_string()).unwrap();
    sleep(Duration::from_secs(1)).await;

    assert_eq!(h.api.toggles.load(Ordering::SeqCst), 1);
    assert_eq!(h.toasts(), vec!["הפעלת הדוד נכשלה".to_string()]);
    h.quit().await;
}
