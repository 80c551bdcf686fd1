#![allow(dead_code)]

use async_trait::async_trait;
use goalgate_application::ports::{
    BlockConfigRepository, GoalStatusSource, HostsFile, KillOutcome, ProcessInfo, ProcessTable,
    StatusSnapshotWriter,
};
use goalgate_domain::{BlockConfig, GoalStatus, PollerError};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;

pub const SYSTEM_HOSTS: &str = "\
127.0.0.1 localhost
255.255.255.255 broadcasthost
::1 localhost
";

/// Polls `condition` every 10ms until it holds or `limit` elapses.
pub async fn wait_until<F: Fn() -> bool>(limit: Duration, condition: F) -> bool {
    let deadline = tokio::time::Instant::now() + limit;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

// ============================================================================
// Mock BlockConfigRepository
// ============================================================================

pub struct MockBlockConfigRepository {
    config: Arc<RwLock<BlockConfig>>,
    path: PathBuf,
    load_count: AtomicU64,
}

impl MockBlockConfigRepository {
    pub fn with_config(config: BlockConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            path: PathBuf::from("/tmp/blocked_config.json"),
            load_count: AtomicU64::new(0),
        }
    }

    pub async fn set(&self, config: BlockConfig) {
        *self.config.write().await = config;
    }

    pub fn load_count(&self) -> u64 {
        self.load_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl BlockConfigRepository for MockBlockConfigRepository {
    async fn load(&self) -> BlockConfig {
        self.load_count.fetch_add(1, Ordering::Relaxed);
        self.config.read().await.clone()
    }

    async fn update(&self, config: &BlockConfig) -> Result<(), PollerError> {
        *self.config.write().await = config.clone();
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

// ============================================================================
// Mock GoalStatusSource
// ============================================================================

pub struct MockGoalStatusSource {
    status: Mutex<Option<GoalStatus>>,
    fetch_count: AtomicU64,
    panics: AtomicBool,
}

impl MockGoalStatusSource {
    pub fn with_status(status: GoalStatus) -> Self {
        Self {
            status: Mutex::new(Some(status)),
            fetch_count: AtomicU64::new(0),
            panics: AtomicBool::new(false),
        }
    }

    /// Every fetch panics, taking the calling task down with it.
    pub fn panicking() -> Self {
        let source = Self::with_status(GoalStatus::default());
        source.panics.store(true, Ordering::Relaxed);
        source
    }

    pub fn set_status(&self, status: Option<GoalStatus>) {
        *self.status.lock().unwrap() = status;
    }

    pub fn fetch_count(&self) -> u64 {
        self.fetch_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl GoalStatusSource for MockGoalStatusSource {
    async fn fetch(&self) -> Option<GoalStatus> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
        if self.panics.load(Ordering::Relaxed) {
            panic!("goal source exploded");
        }
        *self.status.lock().unwrap()
    }

    async fn reset(&self) -> Result<(), PollerError> {
        Ok(())
    }

    fn should_reset_today(&self) -> bool {
        false
    }
}

// ============================================================================
// Mock ProcessTable
// ============================================================================

pub struct MockProcessTable {
    processes: Mutex<Vec<ProcessInfo>>,
    killed: Mutex<Vec<u32>>,
}

impl MockProcessTable {
    pub fn with_processes(processes: Vec<(u32, &str)>) -> Self {
        Self {
            processes: Mutex::new(
                processes
                    .into_iter()
                    .map(|(pid, name)| ProcessInfo::new(pid, name))
                    .collect(),
            ),
            killed: Mutex::new(Vec::new()),
        }
    }

    pub fn spawn(&self, pid: u32, name: &str) {
        self.processes.lock().unwrap().push(ProcessInfo::new(pid, name));
    }

    pub fn killed(&self) -> Vec<u32> {
        self.killed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessTable for MockProcessTable {
    async fn list(&self) -> Result<Vec<ProcessInfo>, PollerError> {
        Ok(self.processes.lock().unwrap().clone())
    }

    async fn kill(&self, pid: u32) -> Result<KillOutcome, PollerError> {
        self.processes.lock().unwrap().retain(|p| p.pid != pid);
        self.killed.lock().unwrap().push(pid);
        Ok(KillOutcome::Killed)
    }
}

// ============================================================================
// In-memory HostsFile
// ============================================================================

pub struct InMemoryHostsFile {
    content: Mutex<String>,
    write_count: AtomicU64,
}

impl InMemoryHostsFile {
    pub fn new(content: &str) -> Self {
        Self {
            content: Mutex::new(content.to_string()),
            write_count: AtomicU64::new(0),
        }
    }

    pub fn system() -> Self {
        Self::new(SYSTEM_HOSTS)
    }

    pub fn content(&self) -> String {
        self.content.lock().unwrap().clone()
    }

    pub fn contains_line(&self, line: &str) -> bool {
        self.content().lines().any(|l| l.trim() == line)
    }

    pub fn write_count(&self) -> u64 {
        self.write_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl HostsFile for InMemoryHostsFile {
    async fn read(&self) -> Result<String, PollerError> {
        Ok(self.content())
    }

    async fn write(&self, content: &str) -> Result<(), PollerError> {
        self.write_count.fetch_add(1, Ordering::Relaxed);
        *self.content.lock().unwrap() = content.to_string();
        Ok(())
    }

    fn location(&self) -> String {
        "memory:/etc/hosts".to_string()
    }
}

// ============================================================================
// Mock StatusSnapshotWriter
// ============================================================================

pub struct MockSnapshotWriter {
    goal: Mutex<Option<bool>>,
}

impl MockSnapshotWriter {
    pub fn new() -> Self {
        Self {
            goal: Mutex::new(None),
        }
    }

    pub fn goal(&self) -> Option<bool> {
        *self.goal.lock().unwrap()
    }
}

#[async_trait]
impl StatusSnapshotWriter for MockSnapshotWriter {
    async fn write_workout_minutes(&self, _minutes: u32) -> Result<(), PollerError> {
        Ok(())
    }

    async fn write_goal_status(&self, goal_reached_today: bool) -> Result<(), PollerError> {
        *self.goal.lock().unwrap() = Some(goal_reached_today);
        Ok(())
    }
}
