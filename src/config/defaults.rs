use super::*;

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            base_interval_secs: 60,
            estimate_interval_secs: 240,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            preferences_file: "boiler_panel_prefs.json".to_string(),
            default_language: "en".to_string(),
            toast_delay_ms: 100,
            toast_duration_ms: 5_000,
            width: 60,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            file: "/tmp/boiler-panel.log".to_string(),
            backup_count: 5,
            console_output: true,
            file_output: true,
            json_format: false,
        }
    }
}
