use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use boiler_panel::config::Config;
use boiler_panel::logging::init_logging;
use boiler_panel::panel::runtime::RuntimeTimings;
use boiler_panel::panel::{ConsoleView, PanelRuntime, build_panel};
use boiler_panel::persistence::FilePreferences;
use boiler_panel::{BoilerApi, HttpBoilerApi};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "boiler-panel")]
#[command(about = "Status and control panel for a water boiler backend")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Log level (overrides config file)
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };
    if let Some(base_url) = args.base_url {
        config.backend.base_url = base_url;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    config.validate().context("Invalid configuration")?;

    init_logging(&config.logging).context("Failed to initialize logging")?;
    info!(
        "Boiler panel starting up (backend {})",
        config.backend.base_url
    );

    let api: Arc<dyn BoilerApi> = Arc::new(
        HttpBoilerApi::new(&config.backend.base_url, config.backend.request_timeout())
            .context("Failed to create HTTP client")?,
    );
    let prefs = FilePreferences::open(&config.ui.preferences_file);
    let panel = build_panel(api.as_ref(), Box::new(prefs), &config.ui.default_language).await;

    let view = ConsoleView::new(std::io::stdout(), config.ui.width);
    let mut runtime = PanelRuntime::new(panel, api, view, RuntimeTimings::from_config(&config));

    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<String>();
    let input_task = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if cmd_tx.send(line).is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    error!("Failed to read command input: {}", e);
                    break;
                }
            }
        }
    });

    let result = tokio::select! {
        r = runtime.run(cmd_rx) => r,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted");
            Ok(())
        }
    };
    input_task.abort();

    match result {
        Ok(()) => {
            info!("Boiler panel shut down");
            Ok(())
        }
        Err(e) => {
            error!("Panel failed with error: {}", e);
            Err(anyhow::anyhow!("Panel error: {}", e))
        }
    }
}
