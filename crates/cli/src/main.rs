mod args;
mod terminal;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clave_core::{
    load_config, load_config_from_env, sample_text, validate_config, AnalysisClient, Config,
    HttpAnalysisClient, Notification, SubmissionController, SubmitOutcome,
};

use args::{Cli, Commands};
use terminal::{RenderOptions, TerminalSurface};

/// Config file looked up in the working directory when none is named
const DEFAULT_CONFIG_FILE: &str = "clave.toml";

/// Exit status when an analysis was rejected or failed
const EXIT_ANALYSIS_FAILED: i32 = 2;

/// Input line that ends an interactive session
const QUIT_COMMAND: &str = ":q";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("Fatal error: {:#}", e);
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    let config = resolve_config(cli.config.as_deref())?;
    validate_config(&config).context("Configuration validation failed")?;
    info!("Analysis service: {}", config.server.base_url);

    // One transport for the whole process.
    let client: Arc<dyn AnalysisClient> = Arc::new(
        HttpAnalysisClient::new(&config).context("Failed to create HTTP client")?,
    );

    let options = RenderOptions {
        color: !cli.no_color && !cli.json,
        json: cli.json,
    };
    let surface = Arc::new(TerminalSurface::new(options));
    let controller = SubmissionController::new(Arc::clone(&client), surface);

    match cli.command {
        Commands::Analyze { text, sample } => {
            let text = match sample {
                Some(kind) => sample_text(kind.into()).to_string(),
                None => text.join(" "),
            };
            let outcome = controller.submit(&text).await;
            Ok(exit_code(&outcome))
        }
        Commands::Health => health(client.as_ref(), cli.json).await,
        Commands::Interactive => interactive(&controller).await,
    }
}

/// Explicit path, then CLAVE_CONFIG, then ./clave.toml, then defaults + env.
fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    let named = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("CLAVE_CONFIG").ok().map(PathBuf::from));

    match named {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            load_config(&path).with_context(|| format!("Failed to load config from {:?}", path))
        }
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            info!("Loading configuration from {}", DEFAULT_CONFIG_FILE);
            load_config(Path::new(DEFAULT_CONFIG_FILE))
                .with_context(|| format!("Failed to load config from {}", DEFAULT_CONFIG_FILE))
        }
        None => load_config_from_env().context("Failed to load config from environment"),
    }
}

async fn health(client: &dyn AnalysisClient, json: bool) -> Result<i32> {
    match client.health().await {
        Ok(status) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!("status:    {}", status.status);
                if let Some(service) = &status.service {
                    println!("service:   {}", service);
                }
                if let Some(model) = &status.model {
                    println!("model:     {}", model);
                }
                if let Some(num_calls) = status.num_calls {
                    println!("num_calls: {}", num_calls);
                }
            }
            Ok(if status.is_healthy() {
                0
            } else {
                EXIT_ANALYSIS_FAILED
            })
        }
        Err(e) => {
            eprintln!("{}", Notification::from(&e).message);
            Ok(EXIT_ANALYSIS_FAILED)
        }
    }
}

async fn interactive(controller: &SubmissionController) -> Result<i32> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim() == QUIT_COMMAND {
            break;
        }
        controller.submit(&line).await;
    }

    Ok(0)
}

fn exit_code(outcome: &SubmitOutcome) -> i32 {
    match outcome {
        SubmitOutcome::Completed(_) => 0,
        SubmitOutcome::Ignored | SubmitOutcome::Rejected(_) | SubmitOutcome::Failed(_) => {
            EXIT_ANALYSIS_FAILED
        }
    }
}
