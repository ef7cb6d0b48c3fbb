//! Status synchronization controller
//!
//! Reconciles completed status fetches and toggle requests into the single
//! current snapshot, and decides when the estimate refresh timer runs. The
//! controller performs no I/O itself: the runtime issues the requests and
//! reports their completion here, which keeps every transition testable
//! without a network or a clock.

use crate::api::types::ToggleResponse;
use crate::error::{PanelError, Result};
use crate::logging::{LogContext, StructuredLogger, get_logger_with_context};

use super::polling::{EstimateTick, PollingState, TimerCommand};
use super::showers::available_showers;
use super::snapshot::{GaugeReading, StatusSnapshot};

/// Identifies one issued status request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket {
    seq: u64,
}

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Result of feeding a completed status fetch to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The snapshot became current; apply the timer command and re-render
    Applied { timer: TimerCommand },
    /// A newer request already completed; the response was dropped
    Stale,
    /// The fetch failed; the previous snapshot stays current
    Failed,
}

/// Result of feeding a completed toggle request to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The boiler was switched on; a refresh should follow
    Started {
        expected_end_time: Option<String>,
        timer: TimerCommand,
    },
    /// The boiler was switched off; a refresh should follow
    Stopped { timer: TimerCommand },
    /// The backend refused the request
    Rejected { message: Option<String> },
    /// The request never got a usable answer
    Failed,
}

impl ToggleOutcome {
    /// Whether the toggle went through and a follow-up refresh is due
    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Started { .. } | Self::Stopped { .. })
    }
}

/// Owns the current snapshot and the estimate refresh sub-state
#[derive(Debug)]
pub struct StatusSyncController {
    current: Option<StatusSnapshot>,
    gauge: Option<GaugeReading>,
    polling: PollingState,
    pending_estimate: Option<String>,
    next_seq: u64,
    last_applied_seq: u64,
    logger: StructuredLogger,
}

impl Default for StatusSyncController {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSyncController {
    pub fn new() -> Self {
        Self {
            current: None,
            gauge: None,
            polling: PollingState::default(),
            pending_estimate: None,
            next_seq: 1,
            last_applied_seq: 0,
            logger: get_logger_with_context(LogContext::new("sync")),
        }
    }

    /// Current snapshot, if any fetch has succeeded yet
    pub fn snapshot(&self) -> Option<&StatusSnapshot> {
        self.current.as_ref()
    }

    /// Last validated gauge value
    pub fn gauge(&self) -> Option<GaugeReading> {
        self.gauge
    }

    pub fn polling(&self) -> PollingState {
        self.polling
    }

    /// Estimated ready time currently being refined
    pub fn pending_estimate(&self) -> Option<&str> {
        self.pending_estimate.as_deref()
    }

    /// Allocate a ticket for a status request about to be issued
    pub fn begin_refresh(&mut self) -> RequestTicket {
        let ticket = RequestTicket { seq: self.next_seq };
        self.next_seq += 1;
        self.logger
            .trace(&format!("Issuing status request #{}", ticket.seq));
        ticket
    }

    /// Feed a completed status request. Responses are applied only when no
    /// later-issued request has completed before them.
    pub fn complete_refresh(
        &mut self,
        ticket: RequestTicket,
        result: Result<StatusSnapshot>,
    ) -> RefreshOutcome {
        let snapshot = match result {
            Ok(snapshot) => snapshot,
            Err(e) => {
                self.logger.warn(&format!(
                    "Status request #{} failed, keeping previous snapshot: {}",
                    ticket.seq, e
                ));
                return RefreshOutcome::Failed;
            }
        };

        if ticket.seq <= self.last_applied_seq {
            self.logger.debug(&format!(
                "Dropping stale status response #{} (already applied #{})",
                ticket.seq, self.last_applied_seq
            ));
            return RefreshOutcome::Stale;
        }
        self.last_applied_seq = ticket.seq;

        let timer = self.apply_snapshot(snapshot);
        RefreshOutcome::Applied { timer }
    }

    fn apply_snapshot(&mut self, snapshot: StatusSnapshot) -> TimerCommand {
        if let Some(temp) = snapshot.current_temp {
            self.gauge = Some(GaugeReading::new(temp));
        }

        let timer = match snapshot.active_estimate() {
            Some(estimate) => {
                self.pending_estimate = Some(estimate.to_string());
                self.polling.has_pending_estimate = true;
                if self.polling.refresh_timer_active {
                    TimerCommand::Keep
                } else {
                    self.logger.info(&format!(
                        "Boiler heating, estimated ready at {}; starting estimate refresh",
                        estimate
                    ));
                    self.polling.refresh_timer_active = true;
                    TimerCommand::Arm
                }
            }
            None => self.clear_estimate(),
        };

        self.current = Some(snapshot);
        timer
    }

    fn clear_estimate(&mut self) -> TimerCommand {
        self.pending_estimate = None;
        self.polling.has_pending_estimate = false;
        if self.polling.refresh_timer_active {
            self.logger
                .info("Estimate resolved or cleared; stopping estimate refresh");
            self.polling.refresh_timer_active = false;
            TimerCommand::Disarm
        } else {
            TimerCommand::Keep
        }
    }

    /// Feed a completed toggle request. `target_temp` is what was sent:
    /// `None` means the boiler was asked to turn off.
    pub fn complete_toggle(
        &mut self,
        target_temp: Option<u8>,
        result: Result<ToggleResponse>,
    ) -> ToggleOutcome {
        let response = match result {
            Ok(response) => response,
            // error page without a JSON body: nothing fit to show the user
            Err(PanelError::Api { message }) => {
                self.logger
                    .warn(&format!("Toggle rejected by backend: {}", message));
                return ToggleOutcome::Rejected { message: None };
            }
            Err(e) => {
                self.logger.error(&format!("Error toggling boiler: {}", e));
                return ToggleOutcome::Failed;
            }
        };

        if !response.success {
            let message = response
                .error
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty());
            self.logger.warn(&format!(
                "Toggle rejected by backend: {}",
                message.as_deref().unwrap_or("no reason given")
            ));
            return ToggleOutcome::Rejected { message };
        }

        match target_temp {
            Some(temp) => {
                let estimate = response
                    .expected_end_time
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty());
                self.logger.info(&format!(
                    "Boiler started at {}°C (estimate: {})",
                    temp,
                    estimate.as_deref().unwrap_or("none")
                ));
                let timer = match &estimate {
                    Some(time) => {
                        self.pending_estimate = Some(time.clone());
                        self.polling.has_pending_estimate = true;
                        self.polling.refresh_timer_active = true;
                        TimerCommand::Arm
                    }
                    None => TimerCommand::Keep,
                };
                ToggleOutcome::Started {
                    expected_end_time: estimate,
                    timer,
                }
            }
            None => {
                self.logger.info("Boiler stopped");
                let timer = self.clear_estimate();
                ToggleOutcome::Stopped { timer }
            }
        }
    }

    /// Decide what to do when the estimate refresh timer fires
    pub fn on_estimate_tick(&mut self) -> EstimateTick {
        if self.polling.has_pending_estimate {
            EstimateTick::Refresh
        } else {
            self.polling.refresh_timer_active = false;
            EstimateTick::Cancel
        }
    }

    /// Showers available right now, at the current water temperature
    pub fn current_showers(&self) -> Option<u32> {
        let snapshot = self.current.as_ref()?;
        let temp = snapshot.current_temp?;
        Some(available_showers(&snapshot.shower_availability, temp))
    }

    /// Showers that would be available at `temp`; `None` without shower data
    pub fn showers_at(&self, temp: f64) -> Option<u32> {
        let snapshot = self.current.as_ref()?;
        if snapshot.shower_availability.is_empty() {
            return None;
        }
        Some(available_showers(&snapshot.shower_availability, temp))
    }
}
