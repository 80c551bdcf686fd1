use crate::{ConfigWatchJob, EnforcementLoopJob};
use tokio::task::{JoinError, JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Central orchestrator for the daemon's background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// let jobs = JobRunner::new(shutdown.clone())
///     .with_enforcement(EnforcementLoopJob::new(tick, config_change, rx))
///     .with_config_watch(ConfigWatchJob::new(config_path, tx))
///     .start();
/// jobs.join().await?;
/// ```
pub struct JobRunner {
    shutdown: CancellationToken,
    enforcement: Option<EnforcementLoopJob>,
    config_watch: Option<ConfigWatchJob>,
}

impl JobRunner {
    /// Registered jobs are bound to `shutdown`.
    pub fn new(shutdown: CancellationToken) -> Self {
        Self {
            shutdown,
            enforcement: None,
            config_watch: None,
        }
    }

    pub fn with_enforcement(mut self, job: EnforcementLoopJob) -> Self {
        self.enforcement = Some(job.with_cancellation(self.shutdown.clone()));
        self
    }

    pub fn with_config_watch(mut self, job: ConfigWatchJob) -> Self {
        self.config_watch = Some(job.with_cancellation(self.shutdown.clone()));
        self
    }

    /// Spawn all registered jobs.
    pub fn start(self) -> RunningJobs {
        info!("Starting background job runner");

        let enforcement = self.enforcement.map(|job| tokio::spawn(async move {
            job.run().await;
        }));
        let config_watch = self.config_watch.map(|job| tokio::spawn(job.run()));

        info!("All background jobs started");

        RunningJobs {
            shutdown: self.shutdown,
            enforcement,
            config_watch,
        }
    }
}

pub struct RunningJobs {
    shutdown: CancellationToken,
    enforcement: Option<JoinHandle<()>>,
    config_watch: Option<JoinHandle<()>>,
}

impl RunningJobs {
    /// Waits for every job to stop.
    ///
    /// Jobs stop when the shutdown token is cancelled. If the enforcement
    /// loop dies on its own (panic), the token is cancelled so the other
    /// jobs stop too, and the failure is returned.
    pub async fn join(self) -> Result<(), JoinError> {
        let mut failure = None;

        if let Some(handle) = self.enforcement {
            if let Err(e) = handle.await {
                error!(error = %e, "Enforcement loop terminated unexpectedly");
                self.shutdown.cancel();
                failure = Some(e);
            }
        }

        if let Some(handle) = self.config_watch {
            if let Err(e) = handle.await {
                error!(error = %e, "Config watcher terminated unexpectedly");
                failure.get_or_insert(e);
            }
        }

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
