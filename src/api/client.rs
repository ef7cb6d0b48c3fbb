use std::time::Duration;

use reqwest::header::{ACCEPT, USER_AGENT};

use crate::error::{PanelError, Result};
use crate::i18n::TranslationTable;
use crate::logging::{LogContext, get_logger_with_context};
use crate::status::StatusSnapshot;

use super::types::{StatusResponse, ToggleRequest, ToggleResponse};

pub const STATUS_PATH: &str = "/api/status";
pub const TOGGLE_PATH: &str = "/api/boiler/toggle";
pub const LANGUAGES_PATH: &str = "/static/languages.json";

/// Backend operations used by the panel
#[async_trait::async_trait]
pub trait BoilerApi: Send + Sync {
    /// Fetch and parse the current status snapshot
    async fn fetch_status(&self) -> Result<StatusSnapshot>;

    /// Ask the backend to switch the boiler; `None` turns it off.
    /// A well-formed rejection comes back as `Ok` with `success == false`.
    async fn toggle(&self, target_temp: Option<u8>) -> Result<ToggleResponse>;

    /// Fetch the translation table
    async fn fetch_languages(&self) -> Result<TranslationTable>;
}

/// `BoilerApi` over HTTP
pub struct HttpBoilerApi {
    base_url: String,
    client: reqwest::Client,
    logger: crate::logging::StructuredLogger,
}

impl HttpBoilerApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        let logger =
            get_logger_with_context(LogContext::new("api").with_field("backend", base_url.clone()));
        Ok(Self {
            base_url,
            client,
            logger,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self
            .client
            .get(self.url(path))
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, concat!("boiler-panel/", env!("CARGO_PKG_VERSION")))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(PanelError::network(format!(
                "GET {} returned {}",
                path,
                resp.status()
            )));
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait::async_trait]
impl BoilerApi for HttpBoilerApi {
    async fn fetch_status(&self) -> Result<StatusSnapshot> {
        let status: StatusResponse = self.get_json(STATUS_PATH).await?;
        self.logger.trace(&format!("Status response: {:?}", status));
        Ok(status.into())
    }

    async fn toggle(&self, target_temp: Option<u8>) -> Result<ToggleResponse> {
        let resp = self
            .client
            .post(self.url(TOGGLE_PATH))
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, concat!("boiler-panel/", env!("CARGO_PKG_VERSION")))
            .json(&ToggleRequest { target_temp })
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        match serde_json::from_str::<ToggleResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            // Error pages without a JSON body still count as a rejection
            Err(_) if !status.is_success() => Err(PanelError::api(format!(
                "Toggle request returned {}",
                status
            ))),
            Err(e) => Err(e.into()),
        }
    }

    async fn fetch_languages(&self) -> Result<TranslationTable> {
        let table: TranslationTable = self.get_json(LANGUAGES_PATH).await?;
        self.logger
            .debug(&format!("Fetched translations for {} languages", table.len()));
        Ok(table)
    }
}
