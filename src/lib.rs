//! # Boiler Panel - status and control client for a water boiler
//!
//! A terminal front end for a boiler backend that reports water
//! temperature, heating state and shower availability, and accepts
//! start/stop commands with a target temperature.
//!
//! ## Features
//!
//! - **Live status**: periodic polling plus a faster refresh while an
//!   estimated ready time is pending
//! - **Ordered updates**: late responses never overwrite newer state
//! - **Shower availability**: live and what-if readouts
//! - **Localization**: backend-provided translation table with English
//!   fallback, persisted language choice and right-to-left layout
//! - **Configuration**: YAML-based configuration with validation
//!
//! ## Architecture
//!
//! - `config`: Configuration management and validation
//! - `logging`: Structured logging and tracing
//! - `api`: HTTP client for the boiler backend
//! - `status`: Snapshots, shower availability and the sync controller
//! - `i18n`: Translation table, language selection and text direction
//! - `persistence`: Key/value preference storage
//! - `panel`: View model, rendering, console commands and the event loop

pub mod api;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod panel;
pub mod persistence;
pub mod status;

// Re-export commonly used types
pub use api::{BoilerApi, HttpBoilerApi};
pub use config::Config;
pub use error::{PanelError, Result};
pub use i18n::LocalizationStore;
pub use panel::{Panel, PanelRuntime, build_panel};
pub use status::{StatusSnapshot, StatusSyncController};
