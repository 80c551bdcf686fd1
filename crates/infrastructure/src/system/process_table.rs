use async_trait::async_trait;
use goalgate_application::ports::{KillOutcome, ProcessInfo, ProcessTable};
use goalgate_domain::PollerError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::process::Command;
use tracing::{debug, warn};

/// Kernel truncates `comm` to 15 bytes.
const COMM_MAX_LEN: usize = 15;

/// Picks the process table for the running platform: procfs when it is
/// mounted, `ps` otherwise (macOS).
pub fn default_process_table() -> Arc<dyn ProcessTable> {
    if Path::new("/proc/self/comm").exists() {
        Arc::new(ProcfsProcessTable::new())
    } else {
        Arc::new(PsProcessTable::new())
    }
}

/// Process table backed by `/proc`.
pub struct ProcfsProcessTable {
    proc_root: PathBuf,
}

impl ProcfsProcessTable {
    pub fn new() -> Self {
        Self {
            proc_root: PathBuf::from("/proc"),
        }
    }

    /// Create a table over a custom proc root (useful for testing)
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            proc_root: path.into(),
        }
    }

    async fn read_name(&self, pid_dir: &Path) -> Option<String> {
        let comm = fs::read_to_string(pid_dir.join("comm")).await.ok()?;
        let comm = comm.trim_end_matches('\n').to_string();

        if comm.len() < COMM_MAX_LEN {
            return Some(comm);
        }

        // Possibly truncated; recover the full executable name from argv[0].
        match fs::read(pid_dir.join("cmdline")).await {
            Ok(raw) => {
                let argv0 = raw.split(|b| *b == 0).next().unwrap_or_default();
                let argv0 = String::from_utf8_lossy(argv0);
                let base = argv0.rsplit('/').next().unwrap_or_default();
                if !base.is_empty() && base.starts_with(&comm) {
                    Some(base.to_string())
                } else {
                    Some(comm)
                }
            }
            Err(_) => Some(comm),
        }
    }
}

impl Default for ProcfsProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessTable for ProcfsProcessTable {
    async fn list(&self) -> Result<Vec<ProcessInfo>, PollerError> {
        let mut entries = fs::read_dir(&self.proc_root).await.map_err(|e| {
            PollerError::Process(format!(
                "Failed to read {}: {}",
                self.proc_root.display(),
                e
            ))
        })?;

        let mut processes = Vec::new();
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "Failed to read process entry");
                    continue;
                }
            };

            let Some(pid) = entry
                .file_name()
                .to_str()
                .and_then(|name| name.parse::<u32>().ok())
            else {
                continue;
            };

            // The process may exit while the table is being read.
            if let Some(name) = self.read_name(&entry.path()).await {
                processes.push(ProcessInfo::new(pid, name));
            }
        }

        processes.sort_by_key(|p| p.pid);
        debug!(count = processes.len(), "Process table read");
        Ok(processes)
    }

    async fn kill(&self, pid: u32) -> Result<KillOutcome, PollerError> {
        send_sigkill(pid)
    }
}

/// Process table backed by `ps`, for systems without procfs.
pub struct PsProcessTable {
    program: String,
}

impl PsProcessTable {
    pub fn new() -> Self {
        Self {
            program: "ps".to_string(),
        }
    }

    /// Parses `ps -axco pid=,comm=` output. Lines that do not start with a
    /// pid are skipped.
    pub fn parse_output(output: &str) -> Vec<ProcessInfo> {
        output
            .lines()
            .filter_map(|line| {
                let line = line.trim_start();
                let (pid, name) = line.split_once(char::is_whitespace)?;
                let pid = pid.parse::<u32>().ok()?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some(ProcessInfo::new(pid, name))
            })
            .collect()
    }
}

impl Default for PsProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessTable for PsProcessTable {
    async fn list(&self) -> Result<Vec<ProcessInfo>, PollerError> {
        let output = Command::new(&self.program)
            .args(["-axco", "pid=,comm="])
            .output()
            .await
            .map_err(|e| PollerError::Process(format!("Failed to run ps: {}", e)))?;

        if !output.status.success() {
            return Err(PollerError::Process(format!(
                "ps exited with {}",
                output.status
            )));
        }

        Ok(Self::parse_output(&String::from_utf8_lossy(&output.stdout)))
    }

    async fn kill(&self, pid: u32) -> Result<KillOutcome, PollerError> {
        send_sigkill(pid)
    }
}

fn send_sigkill(pid: u32) -> Result<KillOutcome, PollerError> {
    let raw_pid = libc::pid_t::try_from(pid)
        .map_err(|_| PollerError::Process(format!("Invalid pid {}", pid)))?;
    if raw_pid <= 0 {
        return Err(PollerError::Process(format!("Invalid pid {}", pid)));
    }

    // SAFETY: kill(2) has no memory-safety preconditions; pid is positive so
    // it never targets a process group.
    let rc = unsafe { libc::kill(raw_pid, libc::SIGKILL) };
    if rc == 0 {
        return Ok(KillOutcome::Killed);
    }

    let err = std::io::Error::last_os_error();
    if err.raw_os_error() == Some(libc::ESRCH) {
        Ok(KillOutcome::NotRunning)
    } else {
        Err(PollerError::Process(format!(
            "Failed to kill process {}: {}",
            pid, err
        )))
    }
}
