//! driftctl - CLI harness for the drift deployment planner
//!
//! Loads two JSON snapshot files, runs the core planner/executor
//! library against them, and renders the result. The only provider
//! this binary ever talks to is the in-process demo provider: there is
//! no RPC transport to real out-of-process providers in this
//! repository (see `DESIGN.md`).

mod cli;
mod display;
mod error;
mod events;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};
use display::OutputRenderer;
use drift_config::Config;
use drift_events::{ChannelObserver, EventEmitter};
use drift_types::Snapshot;
use error::CliError;
use std::path::Path;
use std::process;
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    let config = Config::load(cli.global.config.as_deref()).await.unwrap_or_default();
    logging::init_tracing(&config.logging, json_mode, cli.global.debug);

    if let Err(err) = run(cli, config).await {
        if json_mode {
            let payload = serde_json::json!({ "error": err.to_string() });
            println!("{payload}");
        } else {
            eprintln!("Error: {err}");
        }
        process::exit(1);
    }
}

async fn run(cli: Cli, _config: Config) -> Result<(), CliError> {
    info!("driftctl {} starting {}", env!("CARGO_PKG_VERSION"), cli.command.name());

    let old = load_snapshot(cli.command.old_path()).await?;
    let new = load_snapshot(cli.command.new_path()).await?;

    let registry = drift_registry::demo::demo_registry();
    let mut plan = drift_plan::plan(&old, &new, registry)?;
    let renderer = OutputRenderer::new(cli.global.json);

    match cli.command {
        Commands::Plan { .. } => {
            renderer.render_plan(&plan);
            Ok(())
        }
        Commands::Apply { .. } => {
            let (sender, mut receiver) = drift_events::channel();
            let create = plan.iter().filter(|s| s.operation() == drift_plan::Operation::Create).count();
            let update = plan.iter().filter(|s| s.operation() == drift_plan::Operation::Update).count();
            let delete = plan.iter().filter(|s| s.operation() == drift_plan::Operation::Delete).count();
            sender.emit_plan_started(create, update, delete);

            let observer = ChannelObserver::new(&sender);
            let report = drift_exec::apply(&mut plan, &observer).await;

            if report.succeeded() {
                sender.emit_plan_completed(report.applied);
            } else if let Some(failure) = &report.failure {
                sender.emit_plan_failed(failure.error.to_string());
            }
            drop(sender);

            let event_handler = events::EventHandler::new(!cli.global.json);
            event_handler.drain(&mut receiver);

            renderer.render_report(&plan, &report);

            if let Some(failure) = report.failure {
                return Err(CliError::Exec {
                    moniker: failure.moniker.to_string(),
                    message: failure.error.to_string(),
                });
            }
            Ok(())
        }
    }
}

/// Load a snapshot from `path`, or an empty snapshot if `path` is `None`.
async fn load_snapshot(path: Option<&Path>) -> Result<Snapshot, CliError> {
    let Some(path) = path else {
        return Ok(Snapshot::empty());
    };
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::SnapshotRead { path: path.to_path_buf(), source })?;
    serde_json::from_str(&contents)
        .map_err(|source| CliError::SnapshotParse { path: path.to_path_buf(), source })
}
