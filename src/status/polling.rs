/// Polling sub-state owned by the sync controller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollingState {
    /// An estimated ready time is known and still being refined
    pub has_pending_estimate: bool,
    /// The estimate refresh timer is running
    pub refresh_timer_active: bool,
}

/// What the runtime must do with the estimate refresh timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Start the timer, replacing any running one
    Arm,
    /// Cancel the running timer
    Disarm,
    /// Leave the timer as it is
    Keep,
}

/// Decision taken when the estimate refresh timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimateTick {
    /// Estimate still pending: fetch a fresh snapshot
    Refresh,
    /// Nothing left to refine: cancel the timer
    Cancel,
}
