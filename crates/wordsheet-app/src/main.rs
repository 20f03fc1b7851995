use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use wordsheet_core::dictionary::DictionaryLookup;
use wordsheet_core::{Pipeline, PipelineError};
use wordsheet_lang_english::{EnglishProcessor, YoudaoDictionary};
use wordsheet_types::RunSummary;

pub mod cli;
pub mod controller;
pub mod events;
pub mod profile;
pub mod state;
pub mod status;


use self::cli::Cli;
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_json);

    match run(&cli).await {
        Ok(summary) => {
            if let Err(e) = print_summary(&summary, cli.json) {
                tracing::error!("Failed to print summary: {e:#}");
            }
            if summary.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            tracing::error!("{e:#}");
            match e.downcast_ref::<PipelineError>() {
                Some(PipelineError::NoInputSelected) => ExitCode::from(2),
                _ => ExitCode::from(1),
            }
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,wordsheet=info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr));

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

pub async fn run(cli: &Cli) -> anyhow::Result<RunSummary> {
    let mut config = profile::load_config(cli.config.as_deref())?;
    cli.apply(&mut config);

    let processor = Arc::new(EnglishProcessor::new(config.text.clone()));
    let dictionary: Option<Arc<dyn DictionaryLookup>> = if config.dictionary.enabled {
        let youdao = YoudaoDictionary::new(config.dictionary.clone())
            .context("Failed to build dictionary client")?;
        Some(Arc::new(youdao))
    } else {
        None
    };

    let pipeline = Arc::new(Pipeline::new(processor, dictionary, &config));
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state.clone());

    let shutdown = controller.cancel_token();
    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            tracing::warn!("Ctrl-C received, cancelling run");
            shutdown.cancel();
        }
    });

    let mut tasks = controller.spawn_tasks(pipeline, cli.files.clone()).await;
    while let Some(joined) = tasks.join_next().await {
        joined.context("Task panicked")??;
    }

    let summary = state.status.read().await.summary.clone();
    summary.context("Pipeline stopped without a summary")
}

fn print_summary(summary: &RunSummary, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    for report in &summary.completed {
        println!(
            "ok    {} -> {} ({} words, {} without entry)",
            report.input.display(),
            report.output.display(),
            report.words,
            report.missing
        );
    }
    for failed in &summary.failed {
        println!("fail  {}: {}", failed.path.display(), failed.reason);
    }
    if summary.cancelled {
        println!("cancelled");
    }

    Ok(())
}
