mod api;
mod cli;
mod config;
mod error;
mod model;
mod output;
mod prompt;
mod screen;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::{AppConfig, ConfigOverrides};

use crate::api::client::HttpProductApi;
use crate::api::credentials::StaticToken;
use crate::error::TrendzError;
use crate::prompt::PromptExit;
use crate::screen::cancel::CancellationToken;
use crate::screen::loader::{load_product, LoadOutcome};
use crate::screen::state::{RequestStatus, ScreenState};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "trendz_cli=debug"
    } else {
        "trendz_cli=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = AppConfig::load(ConfigOverrides {
        api_url: cli.api_url,
        token: cli.token,
        timeout_secs: cli.timeout,
    })?;
    tracing::debug!(
        "Using API {} (config dir {})",
        config.api_base_url,
        config.config_dir.display()
    );

    let cancel = CancellationToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || {
        if handler_token.is_cancelled() {
            std::process::exit(130);
        }
        eprintln!("\nInterrupted. Closing product screen...");
        handler_token.cancel();
    })
    .context("Failed to set Ctrl+C handler")?;

    match cli.command {
        Commands::Product {
            id_or_path,
            json,
            interactive,
        } => cmd_product(&config, &cancel, &id_or_path, json, interactive).await,
    }
}

async fn cmd_product(
    config: &AppConfig,
    cancel: &CancellationToken,
    id_or_path: &str,
    json: bool,
    interactive: bool,
) -> Result<ExitCode> {
    let product_id = parse_product_identifier(id_or_path)?;
    let api = HttpProductApi::new(config).context("Failed to build HTTP client")?;
    let credentials = StaticToken::new(config.token.clone());

    let mut state = ScreenState::new();
    let outcome = load_product(&mut state, &api, &credentials, &product_id, cancel, |s| {
        // Only the loading view goes to stderr; the settled view is printed below.
        if !json && s.status() == RequestStatus::InProgress {
            eprint!("{}", output::render(&output::select_view(s)));
        }
    })
    .await
    .context("Product screen entered an invalid state")?;

    if outcome == LoadOutcome::Discarded {
        return Ok(ExitCode::from(130));
    }

    if json {
        print!("{}", output::render_json(&state)?);
    } else {
        print!("{}", output::render(&output::select_view(&state)));
    }

    if interactive && state.status() == RequestStatus::Success {
        eprintln!("\nQuantity: + to add, - to remove, a to add to cart, q to quit");
        let mut lines = prompt::spawn_stdin_reader();
        let exit = prompt::run_quantity_prompt(&mut state, &mut lines, cancel)
            .await
            .context("Quantity prompt failed")?;
        if exit == PromptExit::Cancelled {
            return Ok(ExitCode::from(130));
        }
    }

    Ok(match state.status() {
        RequestStatus::Success => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

fn parse_product_identifier(input: &str) -> Result<String, TrendzError> {
    // Route paths and full URLs carry the id as their last non-empty segment.
    let path = input.trim().split(['?', '#']).next().unwrap_or("");
    let candidate = path.rsplit('/').find(|s| !s.is_empty()).unwrap_or("");

    // A bare listing route such as `/products/` names no product.
    if candidate.is_empty()
        || candidate == output::PRODUCTS_ROUTE.trim_start_matches('/')
        || !candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(TrendzError::InvalidProductId(input.to_string()));
    }

    Ok(candidate.to_string())
}
