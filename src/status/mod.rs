//! Appliance status: snapshots, shower availability and the controller that
//! keeps them in sync with the backend.

pub mod polling;
pub mod showers;
pub mod snapshot;
pub mod sync;

pub use polling::{EstimateTick, PollingState, TimerCommand};
pub use showers::available_showers;
pub use snapshot::{GaugeReading, ShowerLevel, StatusSnapshot};
pub use sync::{RefreshOutcome, RequestTicket, StatusSyncController, ToggleOutcome};
