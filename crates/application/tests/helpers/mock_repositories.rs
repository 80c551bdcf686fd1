#![allow(dead_code)]

use async_trait::async_trait;
use goalgate_application::ports::{
    BlockConfigRepository, GoalStatusSource, Heartbeat, HostsFile, KillOutcome, Notification,
    Notifier, ProcessInfo, ProcessTable, StatusSnapshotWriter,
};
use goalgate_domain::{BlockConfig, GoalStatus, PollerError};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

pub const SYSTEM_HOSTS: &str = "\
127.0.0.1 localhost
255.255.255.255 broadcasthost
::1 localhost
";

// ============================================================================
// Mock BlockConfigRepository
// ============================================================================

pub struct MockBlockConfigRepository {
    config: Arc<RwLock<BlockConfig>>,
    path: PathBuf,
    should_fail: AtomicBool,
    update_count: AtomicU64,
}

impl MockBlockConfigRepository {
    pub fn new() -> Self {
        Self::with_config(BlockConfig::empty())
    }

    pub fn with_config(config: BlockConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            path: PathBuf::from("/tmp/blocked_config.json"),
            should_fail: AtomicBool::new(false),
            update_count: AtomicU64::new(0),
        }
    }

    pub async fn set(&self, config: BlockConfig) {
        *self.config.write().await = config;
    }

    pub async fn current(&self) -> BlockConfig {
        self.config.read().await.clone()
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    pub fn update_count(&self) -> u64 {
        self.update_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl BlockConfigRepository for MockBlockConfigRepository {
    async fn load(&self) -> BlockConfig {
        self.config.read().await.clone()
    }

    async fn update(&self, config: &BlockConfig) -> Result<(), PollerError> {
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(PollerError::Config("disk full".to_string()));
        }
        self.update_count.fetch_add(1, Ordering::Relaxed);
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
    reset_due: AtomicBool,
    reset_fails: AtomicBool,
    fetch_count: AtomicU64,
    reset_count: AtomicU64,
}

impl MockGoalStatusSource {
    pub fn with_status(status: GoalStatus) -> Self {
        Self {
            status: Mutex::new(Some(status)),
            reset_due: AtomicBool::new(false),
            reset_fails: AtomicBool::new(false),
            fetch_count: AtomicU64::new(0),
            reset_count: AtomicU64::new(0),
        }
    }

    pub fn unreachable() -> Self {
        let source = Self::with_status(GoalStatus::default());
        source.set_status(None);
        source
    }

    pub fn set_status(&self, status: Option<GoalStatus>) {
        *self.status.lock().unwrap() = status;
    }

    pub fn set_reset_due(&self, due: bool) {
        self.reset_due.store(due, Ordering::Relaxed);
    }

    pub fn set_reset_fails(&self, fails: bool) {
        self.reset_fails.store(fails, Ordering::Relaxed);
    }

    pub fn fetch_count(&self) -> u64 {
        self.fetch_count.load(Ordering::Relaxed)
    }

    pub fn reset_count(&self) -> u64 {
        self.reset_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl GoalStatusSource for MockGoalStatusSource {
    async fn fetch(&self) -> Option<GoalStatus> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
        *self.status.lock().unwrap()
    }

    async fn reset(&self) -> Result<(), PollerError> {
        self.reset_count.fetch_add(1, Ordering::Relaxed);
        if self.reset_fails.load(Ordering::Relaxed) {
            return Err(PollerError::Firebase("connection refused".to_string()));
        }
        let mut status = self.status.lock().unwrap();
        if let Some(s) = status.as_mut() {
            s.goal_reached_today = false;
        }
        Ok(())
    }

    fn should_reset_today(&self) -> bool {
        self.reset_due.swap(false, Ordering::Relaxed)
    }
}

// ============================================================================
// Mock ProcessTable
// ============================================================================

pub struct MockProcessTable {
    processes: Mutex<Vec<ProcessInfo>>,
    killed: Mutex<Vec<u32>>,
    vanished: Mutex<HashSet<u32>>,
    protected: Mutex<HashSet<u32>>,
    list_fails: AtomicBool,
}

impl MockProcessTable {
    pub fn new() -> Self {
        Self::with_processes(vec![])
    }

    pub fn with_processes(processes: Vec<(u32, &str)>) -> Self {
        Self {
            processes: Mutex::new(
                processes
                    .into_iter()
                    .map(|(pid, name)| ProcessInfo::new(pid, name))
                    .collect(),
            ),
            killed: Mutex::new(Vec::new()),
            vanished: Mutex::new(HashSet::new()),
            protected: Mutex::new(HashSet::new()),
            list_fails: AtomicBool::new(false),
        }
    }

    pub fn spawn(&self, pid: u32, name: &str) {
        self.processes.lock().unwrap().push(ProcessInfo::new(pid, name));
    }

    /// Listed, but exits before the kill arrives.
    pub fn mark_vanished(&self, pid: u32) {
        self.vanished.lock().unwrap().insert(pid);
    }

    /// Listed, but the kill is refused.
    pub fn mark_protected(&self, pid: u32) {
        self.protected.lock().unwrap().insert(pid);
    }

    pub fn set_list_fails(&self, fails: bool) {
        self.list_fails.store(fails, Ordering::Relaxed);
    }

    pub fn killed(&self) -> Vec<u32> {
        self.killed.lock().unwrap().clone()
    }

    pub fn running(&self) -> Vec<String> {
        self.processes
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }
}

#[async_trait]
impl ProcessTable for MockProcessTable {
    async fn list(&self) -> Result<Vec<ProcessInfo>, PollerError> {
        if self.list_fails.load(Ordering::Relaxed) {
            return Err(PollerError::Process("cannot read process table".to_string()));
        }
        Ok(self.processes.lock().unwrap().clone())
    }

    async fn kill(&self, pid: u32) -> Result<KillOutcome, PollerError> {
        if self.protected.lock().unwrap().contains(&pid) {
            return Err(PollerError::Process(format!("kill {pid}: operation not permitted")));
        }

        let mut processes = self.processes.lock().unwrap();
        processes.retain(|p| p.pid != pid);

        if self.vanished.lock().unwrap().contains(&pid) {
            return Ok(KillOutcome::NotRunning);
        }

        self.killed.lock().unwrap().push(pid);
        Ok(KillOutcome::Killed)
    }
}

// ============================================================================
// Mock Notifier
// ============================================================================

pub struct MockNotifier {
    sent: Mutex<Vec<Notification>>,
    should_fail: AtomicBool,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), PollerError> {
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(PollerError::Process("no display".to_string()));
        }
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

// ============================================================================
// In-memory HostsFile
// ============================================================================

pub struct InMemoryHostsFile {
    content: Mutex<String>,
    read_only: AtomicBool,
    write_count: AtomicU64,
}

impl InMemoryHostsFile {
    pub fn new(content: &str) -> Self {
        Self {
            content: Mutex::new(content.to_string()),
            read_only: AtomicBool::new(false),
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

    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::Relaxed);
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
        if self.read_only.load(Ordering::Relaxed) {
            return Err(PollerError::HostsPermissionDenied(self.location()));
        }
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
    minutes: Mutex<Option<u32>>,
    goal: Mutex<Option<bool>>,
    should_fail: AtomicBool,
}

impl MockSnapshotWriter {
    pub fn new() -> Self {
        Self {
            minutes: Mutex::new(None),
            goal: Mutex::new(None),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::Relaxed);
    }

    pub fn minutes(&self) -> Option<u32> {
        *self.minutes.lock().unwrap()
    }

    pub fn goal(&self) -> Option<bool> {
        *self.goal.lock().unwrap()
    }
}

#[async_trait]
impl StatusSnapshotWriter for MockSnapshotWriter {
    async fn write_workout_minutes(&self, minutes: u32) -> Result<(), PollerError> {
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(PollerError::Config("read-only frontend dir".to_string()));
        }
        *self.minutes.lock().unwrap() = Some(minutes);
        Ok(())
    }

    async fn write_goal_status(&self, goal_reached_today: bool) -> Result<(), PollerError> {
        if self.should_fail.load(Ordering::Relaxed) {
            return Err(PollerError::Config("read-only frontend dir".to_string()));
        }
        *self.goal.lock().unwrap() = Some(goal_reached_today);
        Ok(())
    }
}

// ============================================================================
// Mock Heartbeat
// ============================================================================

pub struct MockHeartbeat {
    alive: AtomicBool,
}

impl MockHeartbeat {
    pub fn new() -> Self {
        Self {
            alive: AtomicBool::new(false),
        }
    }

    pub fn alive() -> Self {
        Self {
            alive: AtomicBool::new(true),
        }
    }
}

#[async_trait]
impl Heartbeat for MockHeartbeat {
    async fn beat(&self) -> Result<(), PollerError> {
        self.alive.store(true, Ordering::Relaxed);
        Ok(())
    }

    async fn clear(&self) -> Result<bool, PollerError> {
        Ok(self.alive.swap(false, Ordering::Relaxed))
    }

    async fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}
