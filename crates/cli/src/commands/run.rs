use crate::bootstrap::shutdown_signal;
use crate::di::{Adapters, UseCases};
use goalgate_application::ports::Heartbeat;
use goalgate_domain::Settings;
use goalgate_jobs::{ConfigWatchJob, EnforcementLoopJob, JobRunner};
use std::process::ExitCode;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const CONFIG_EVENT_BUFFER: usize = 8;

/// Runs the daemon until SIGINT/SIGTERM, then unwinds every block.
pub async fn run(settings: &Settings) -> anyhow::Result<ExitCode> {
    info!("Starting goalgate");

    let adapters = Adapters::build(settings).await?;
    adapters.heartbeat.beat().await?;

    let use_cases = UseCases::new(&adapters);
    let shutdown = CancellationToken::new();
    let (events_tx, events_rx) = mpsc::channel(CONFIG_EVENT_BUFFER);

    let jobs = JobRunner::new(shutdown.clone())
        .with_enforcement(
            EnforcementLoopJob::new(use_cases.tick.clone(), use_cases.config_change.clone(), events_rx)
                .with_interval(settings.enforcement.poll_interval_secs),
        )
        .with_config_watch(
            ConfigWatchJob::new(settings.paths.block_config_path(), events_tx)
                .with_interval_ms(settings.enforcement.watch_interval_ms),
        )
        .start();

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        tokio::select! {
            _ = shutdown_signal() => signal_token.cancel(),
            _ = signal_token.cancelled() => {}
        }
    });

    let outcome = jobs.join().await;

    let report = use_cases.cleanup.execute().await;
    info!(
        hosts_entries_removed = report.hosts.as_ref().map(|h| h.removed).unwrap_or(0),
        heartbeat_removed = report.heartbeat_removed,
        "Cleanup finished"
    );

    match outcome {
        Ok(()) => {
            info!("goalgate stopped");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(error = %e, "Fatal error in enforcement loop");
            Ok(ExitCode::FAILURE)
        }
    }
}
