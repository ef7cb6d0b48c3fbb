use std::collections::BTreeMap;

use super::TranslationTable;
use super::keys::*;

/// Built-in English strings. Covers every key the panel renders so that a
/// missing or broken `languages.json` never leaves blanks on screen.
pub fn english() -> BTreeMap<String, String> {
    let pairs: &[(&str, &str)] = &[
        (TITLE, "Water Boiler Control"),
        (LANGUAGE_NAME, "English"),
        (LANGUAGE, "Language"),
        (LAST_UPDATE, "Last Update"),
        (BOILER_STATUS, "Boiler Status"),
        (CURRENT_TEMPERATURE, "Water Temperature"),
        (TARGET, "Target"),
        (REFRESH, "Refresh Now"),
        (TOGGLE_BOILER, "Toggle Boiler"),
        (TURN_ON, "Turn On"),
        (TURN_OFF, "Turn Off"),
        (ON, "ON"),
        (OFF, "OFF"),
        (UNKNOWN, "Unknown"),
        (ESTIMATED_READY, "Estimated ready:"),
        (SHOWERS_AVAILABLE, "Up to {count} shower(s) available"),
        (NO_SHOWERS, "No showers available"),
        (SET_TEMPERATURE, "Set Target Temperature"),
        (SELECT_TEMPERATURE, "Select Temperature"),
        (START_BOILER, "Start Boiler"),
        (CANCEL, "Cancel"),
        (SHOWERS_AT_TEMP, "{count} shower(s) available at {temp}°C"),
        (NO_SHOWERS_AT_TEMP, "No showers available at {temp}°C"),
        (SELECT_TO_SEE, "Select a temperature to see shower availability"),
        (
            INVALID_TEMPERATURE,
            "Please select a valid temperature between {min}°C and {max}°C",
        ),
        (BOILER_STARTED, "Boiler started! Estimated ready time: {time}"),
        (ALREADY_ON, "Boiler is already on"),
        (TOGGLE_FAILED, "Failed to toggle boiler"),
        (SERVER_ERROR, "Error communicating with server"),
        (UNKNOWN_COMMAND, "Unknown command: {command}"),
        (
            COMMANDS_HELP,
            "Commands: on <temp>, on, preview <temp>, cancel, off, toggle, refresh, lang <code>, help, quit",
        ),
    ];
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Translation table holding only the built-in English strings
pub fn table() -> TranslationTable {
    let mut table = TranslationTable::new();
    table.insert("en".to_string(), english());
    table
}
