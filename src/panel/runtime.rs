//! Panel event loop.
//!
//! One task owns the panel, both refresh timers and the view. Network
//! requests run as spawned tasks and report back over an mpsc channel, so
//! the controller only ever sees completions in the order this loop
//! receives them.

use std::future::pending;
use std::ops::ControlFlow;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::{Duration, Instant, Interval, MissedTickBehavior, interval, interval_at, sleep};

use crate::api::{BoilerApi, ToggleResponse};
use crate::config::Config;
use crate::error::Result;
use crate::i18n::keys;
use crate::logging::{StructuredLogger, get_logger};
use crate::status::{
    EstimateTick, RefreshOutcome, RequestTicket, StatusSnapshot, TimerCommand, ToggleOutcome,
};

use super::Panel;
use super::command::{Command, CommandError, parse_command};
use super::console::PanelView;
use super::toast::{ToastId, ToastKind};
use super::view::{MAX_TARGET_C, MIN_TARGET_C, StatusView, ToggleAction};

/// Timer periods used by the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeTimings {
    pub base_interval: Duration,
    pub estimate_interval: Duration,
    pub toast_delay: Duration,
    pub toast_duration: Duration,
}

impl Default for RuntimeTimings {
    fn default() -> Self {
        Self {
            base_interval: Duration::from_secs(60),
            estimate_interval: Duration::from_secs(240),
            toast_delay: Duration::from_millis(100),
            toast_duration: Duration::from_secs(5),
        }
    }
}

impl RuntimeTimings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_interval: config.polling.base_interval(),
            estimate_interval: config.polling.estimate_interval(),
            toast_delay: config.ui.toast_delay(),
            toast_duration: config.ui.toast_duration(),
        }
    }
}

/// Completions delivered back to the loop
#[derive(Debug)]
pub enum PanelEvent {
    StatusFetched {
        ticket: RequestTicket,
        result: Result<StatusSnapshot>,
    },
    ToggleFinished {
        target: Option<u8>,
        result: Result<ToggleResponse>,
    },
    ToastShow(ToastId),
    ToastExpire(ToastId),
}

pub struct PanelRuntime<V: PanelView> {
    panel: Panel,
    api: Arc<dyn BoilerApi>,
    view: V,
    timings: RuntimeTimings,
    events_tx: mpsc::UnboundedSender<PanelEvent>,
    events_rx: mpsc::UnboundedReceiver<PanelEvent>,
    estimate_timer: Option<Interval>,
    logger: StructuredLogger,
}

impl<V: PanelView> PanelRuntime<V> {
    pub fn new(panel: Panel, api: Arc<dyn BoilerApi>, view: V, timings: RuntimeTimings) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            panel,
            api,
            view,
            timings,
            events_tx,
            events_rx,
            estimate_timer: None,
            logger: get_logger("runtime"),
        }
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Whether the estimate refresh timer is currently running
    pub fn estimate_timer_armed(&self) -> bool {
        self.estimate_timer.is_some()
    }

    /// Run until `quit` is entered. Polling continues after the command
    /// channel closes; the caller then stops the loop by dropping it.
    pub async fn run(&mut self, mut commands: mpsc::UnboundedReceiver<String>) -> Result<()> {
        self.logger.info(&format!(
            "Panel running (base refresh {}s, estimate refresh {}s)",
            self.timings.base_interval.as_secs(),
            self.timings.estimate_interval.as_secs()
        ));
        self.redraw();

        // first tick fires immediately: the startup fetch
        let mut base_timer = interval(self.timings.base_interval);
        base_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut input_open = true;

        loop {
            tokio::select! {
                _ = base_timer.tick() => {
                    self.issue_refresh();
                }
                () = next_estimate_tick(&mut self.estimate_timer) => {
                    self.handle_estimate_tick();
                }
                Some(event) = self.events_rx.recv() => {
                    self.handle_event(event);
                }
                line = commands.recv(), if input_open => {
                    let Some(line) = line else {
                        self.logger.info("Command input closed, panel keeps polling");
                        input_open = false;
                        continue;
                    };
                    if self.handle_line(&line).is_break() {
                        self.logger.info("Quit requested");
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    fn redraw(&mut self) {
        let rendered = self.panel.render();
        if let Err(e) = self.view.render(&rendered) {
            self.logger.warn(&format!("Failed to draw panel: {}", e));
        }
    }

    fn notice(&mut self, message: &str) {
        if let Err(e) = self.view.notice(message) {
            self.logger.warn(&format!("Failed to print notice: {}", e));
        }
    }

    fn issue_refresh(&mut self) {
        let ticket = self.panel.controller_mut().begin_refresh();
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_status().await;
            tx.send(PanelEvent::StatusFetched { ticket, result }).ok();
        });
    }

    fn issue_toggle(&mut self, target: Option<u8>) {
        match target {
            Some(temp) => self
                .logger
                .info(&format!("Requesting boiler start at {}°C", temp)),
            None => self.logger.info("Requesting boiler stop"),
        }
        let api = Arc::clone(&self.api);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = api.toggle(target).await;
            tx.send(PanelEvent::ToggleFinished { target, result }).ok();
        });
    }

    fn apply_timer(&mut self, command: TimerCommand) {
        match command {
            TimerCommand::Arm => {
                let period = self.timings.estimate_interval;
                let mut timer = interval_at(Instant::now() + period, period);
                timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
                // replaces (and so cancels) any running timer
                self.estimate_timer = Some(timer);
                self.logger.debug("Estimate refresh timer armed");
            }
            TimerCommand::Disarm => {
                self.estimate_timer = None;
                self.logger.debug("Estimate refresh timer disarmed");
            }
            TimerCommand::Keep => {}
        }
    }

    fn handle_estimate_tick(&mut self) {
        match self.panel.controller_mut().on_estimate_tick() {
            EstimateTick::Refresh => self.issue_refresh(),
            EstimateTick::Cancel => self.apply_timer(TimerCommand::Disarm),
        }
    }

    fn handle_event(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::StatusFetched { ticket, result } => {
                match self.panel.controller_mut().complete_refresh(ticket, result) {
                    RefreshOutcome::Applied { timer } => {
                        self.apply_timer(timer);
                        self.redraw();
                    }
                    RefreshOutcome::Stale | RefreshOutcome::Failed => {}
                }
            }
            PanelEvent::ToggleFinished { target, result } => self.handle_toggle(target, result),
            PanelEvent::ToastShow(id) => {
                if self.panel.toasts_mut().reveal(id) {
                    self.redraw();
                }
            }
            PanelEvent::ToastExpire(id) => {
                if self.panel.toasts_mut().expire(id) {
                    self.redraw();
                }
            }
        }
    }

    fn handle_toggle(&mut self, target: Option<u8>, result: Result<ToggleResponse>) {
        let outcome = self.panel.controller_mut().complete_toggle(target, result);
        let succeeded = outcome.succeeded();

        match outcome {
            ToggleOutcome::Started {
                expected_end_time,
                timer,
            } => {
                self.apply_timer(timer);
                if let Some(time) = expected_end_time {
                    let message = self
                        .panel
                        .i18n()
                        .translate(keys::BOILER_STARTED, &[("time", time)]);
                    self.show_toast(message, ToastKind::Success);
                }
            }
            ToggleOutcome::Stopped { timer } => self.apply_timer(timer),
            ToggleOutcome::Rejected { message } => {
                let message = message.unwrap_or_else(|| self.panel.i18n().t(keys::TOGGLE_FAILED));
                self.show_toast(message, ToastKind::Error);
            }
            ToggleOutcome::Failed => {
                let message = self.panel.i18n().t(keys::SERVER_ERROR);
                self.show_toast(message, ToastKind::Error);
            }
        }

        if succeeded {
            self.issue_refresh();
        }
        self.redraw();
    }

    /// Queue a toast and schedule its reveal and removal
    fn show_toast(&mut self, message: String, kind: ToastKind) {
        let id = self.panel.toasts_mut().push(message, kind);
        let delay = self.timings.toast_delay;
        let duration = self.timings.toast_duration;
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            sleep(delay).await;
            if tx.send(PanelEvent::ToastShow(id)).is_err() {
                return;
            }
            sleep(duration).await;
            tx.send(PanelEvent::ToastExpire(id)).ok();
        });
    }

    fn handle_line(&mut self, line: &str) -> ControlFlow<()> {
        match parse_command(line) {
            Ok(command) => self.handle_command(command),
            Err(CommandError::Empty) => ControlFlow::Continue(()),
            Err(CommandError::InvalidTemperature(raw)) => {
                self.logger
                    .debug(&format!("Rejected target temperature: {}", raw));
                let message = self.panel.i18n().translate(
                    keys::INVALID_TEMPERATURE,
                    &[
                        ("min", MIN_TARGET_C.to_string()),
                        ("max", MAX_TARGET_C.to_string()),
                    ],
                );
                self.notice(&message);
                ControlFlow::Continue(())
            }
            Err(CommandError::Unknown(word)) => {
                let message = self
                    .panel
                    .i18n()
                    .translate(keys::UNKNOWN_COMMAND, &[("command", word)]);
                self.notice(&message);
                ControlFlow::Continue(())
            }
            Err(CommandError::MissingArgument(_)) => {
                let message = self.panel.i18n().t(keys::COMMANDS_HELP);
                self.notice(&message);
                ControlFlow::Continue(())
            }
        }
    }

    fn handle_command(&mut self, command: Command) -> ControlFlow<()> {
        self.logger.debug(&format!("Command: {:?}", command));
        match command {
            // the backend flips state, so a target is only sent while off
            Command::TurnOn(selection) => match self.toggle_action() {
                ToggleAction::TurnOn => {
                    self.panel.close_dialog();
                    self.issue_toggle(Some(selection.celsius()));
                    self.redraw();
                }
                ToggleAction::TurnOff => {
                    let message = self.panel.i18n().t(keys::ALREADY_ON);
                    self.notice(&message);
                }
            },
            Command::OpenDialog => self.open_dialog(),
            Command::Preview(selection) => {
                self.panel.select_temperature(selection);
                self.redraw();
            }
            Command::Cancel => {
                self.panel.close_dialog();
                self.redraw();
            }
            Command::TurnOff => self.issue_toggle(None),
            Command::Toggle => match self.toggle_action() {
                ToggleAction::TurnOff => self.issue_toggle(None),
                ToggleAction::TurnOn => self.open_dialog(),
            },
            Command::Refresh => self.issue_refresh(),
            Command::Language(code) => {
                if self.panel.i18n_mut().set_language(&code) {
                    self.redraw();
                }
            }
            Command::Help => {
                let message = self.panel.i18n().t(keys::COMMANDS_HELP);
                self.notice(&message);
            }
            Command::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    fn toggle_action(&self) -> ToggleAction {
        StatusView::derive(self.panel.controller()).toggle_action()
    }

    /// Open the temperature dialog and fetch fresh shower data for it
    fn open_dialog(&mut self) {
        self.panel.open_dialog();
        self.issue_refresh();
        self.redraw();
    }
}

async fn next_estimate_tick(timer: &mut Option<Interval>) {
    match timer {
        Some(timer) => {
            timer.tick().await;
        }
        None => pending::<()>().await,
    }
}
