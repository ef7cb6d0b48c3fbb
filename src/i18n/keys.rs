//! Translation keys used by the panel.

pub const TITLE: &str = "title";
pub const LANGUAGE_NAME: &str = "languageName";
pub const LANGUAGE: &str = "language";
pub const LAST_UPDATE: &str = "lastUpdate";
pub const BOILER_STATUS: &str = "boilerStatus";
pub const CURRENT_TEMPERATURE: &str = "currentTemperature";
pub const TARGET: &str = "target";
pub const REFRESH: &str = "refresh";
pub const TOGGLE_BOILER: &str = "toggleBoiler";
pub const TURN_ON: &str = "turnOn";
pub const TURN_OFF: &str = "turnOff";
pub const ON: &str = "on";
pub const OFF: &str = "off";
pub const UNKNOWN: &str = "unknown";
pub const ESTIMATED_READY: &str = "estimatedReady";

pub const SHOWERS_AVAILABLE: &str = "showersAvailable";
pub const NO_SHOWERS: &str = "noShowers";

pub const SET_TEMPERATURE: &str = "setTemperature";
pub const SELECT_TEMPERATURE: &str = "selectTemperature";
pub const START_BOILER: &str = "startBoiler";
pub const CANCEL: &str = "cancel";
pub const SHOWERS_AT_TEMP: &str = "showersAtTemp";
pub const NO_SHOWERS_AT_TEMP: &str = "noShowersAtTemp";
pub const SELECT_TO_SEE: &str = "selectToSee";
pub const INVALID_TEMPERATURE: &str = "invalidTemperature";

pub const BOILER_STARTED: &str = "boilerStarted";
pub const ALREADY_ON: &str = "boilerAlreadyOn";
pub const TOGGLE_FAILED: &str = "toggleFailed";
pub const SERVER_ERROR: &str = "serverError";
pub const UNKNOWN_COMMAND: &str = "unknownCommand";
pub const COMMANDS_HELP: &str = "commandsHelp";
