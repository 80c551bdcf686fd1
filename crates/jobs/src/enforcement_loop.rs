use crate::config_watch::ConfigEvent;
use goalgate_application::use_cases::{
    EnforcementReport, HandleConfigChangeUseCase, RunEnforcementTickUseCase, TickReport,
};
use goalgate_domain::{EnforcementState, GoalTransition};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// The daemon's poll loop.
///
/// Ticks and config-change events are both handled on this one task, so
/// enforcement never runs concurrently with itself.
pub struct EnforcementLoopJob {
    tick: Arc<RunEnforcementTickUseCase>,
    config_change: Arc<HandleConfigChangeUseCase>,
    events: mpsc::Receiver<ConfigEvent>,
    poll_interval_secs: u64,
    state: EnforcementState,
    shutdown: CancellationToken,
}

impl EnforcementLoopJob {
    pub fn new(
        tick: Arc<RunEnforcementTickUseCase>,
        config_change: Arc<HandleConfigChangeUseCase>,
        events: mpsc::Receiver<ConfigEvent>,
    ) -> Self {
        Self {
            tick,
            config_change,
            events,
            poll_interval_secs: 10,
            state: EnforcementState::new(),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, secs: u64) -> Self {
        self.poll_interval_secs = secs.max(1);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Runs until cancelled. Returns the final state for inspection.
    pub async fn run(mut self) -> EnforcementState {
        info!(interval_secs = self.poll_interval_secs, "Starting enforcement loop");

        let mut interval = tokio::time::interval(Duration::from_secs(self.poll_interval_secs));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => {
                    info!("EnforcementLoopJob: shutting down");
                    break;
                }
                Some(ConfigEvent::Changed) = self.events.recv() => {
                    let report = self.config_change.execute().await;
                    log_enforcement("config change", &report);
                }
                _ = interval.tick() => {
                    let report = self.tick.execute().await;
                    self.record(&report);
                }
            }
        }

        self.state
    }

    fn record(&mut self, report: &TickReport) {
        match self.state.record(report.status.goal_reached_today) {
            GoalTransition::Initial(state) => {
                info!(goal_reached_today = state, "Initial goal state");
            }
            GoalTransition::Changed { from, to } => {
                info!("goalReachedToday changed: {} -> {}", from, to);
            }
            GoalTransition::Unchanged(_) => {}
        }
        log_enforcement("tick", &report.enforcement);
    }
}

fn log_enforcement(trigger: &str, report: &EnforcementReport) {
    if report.is_clean() {
        debug!(
            trigger,
            decision = %report.decision,
            killed = report.processes_killed,
            "Enforcement applied"
        );
    } else {
        warn!(
            trigger,
            decision = %report.decision,
            process_error = ?report.process_error,
            hosts_error = ?report.hosts_error,
            "Enforcement applied with errors"
        );
    }
}
