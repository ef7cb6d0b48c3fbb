//! Boiler backend HTTP API
//!
//! The backend exposes a status document, a toggle actuator and the static
//! translation table. Everything the panel knows about the appliance comes
//! through the `BoilerApi` trait.

pub mod client;
pub mod types;

pub use client::{BoilerApi, HttpBoilerApi};
pub use types::{StatusResponse, ToggleRequest, ToggleResponse};
