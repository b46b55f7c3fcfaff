//! psutil-backed stats probe and command-line resolver
//!
//! Both read `/proc` synchronously, so each lookup runs on the blocking
//! pool. The probe is an owned client: whatever it caches lives until the
//! owner calls [`StatsProbe::clear`] at the end of the run.
//!
//! The cache holds process start times only. A normal run samples each pid
//! once, so it is read only when a pid is sampled again before `clear`
//! (a duplicated listing line, or a long-lived caller reusing the probe).
//! Its main job is giving the client a lifetime the owner ends explicitly.

use crate::core::models::{Pid, ProcessStats};
use crate::core::traits::{CommandResolver, StatsProbe};
use crate::error::{ProbeError, ProbeResult};
use async_trait::async_trait;
use parking_lot::Mutex;
use psutil::process::{Process, ProcessError};
use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::task;
use tracing::debug;

impl ProbeError {
    fn from_psutil(pid: Pid, err: ProcessError) -> Self {
        match err {
            ProcessError::NoSuchProcess { .. } | ProcessError::ZombieProcess { .. } => {
                ProbeError::Exited { pid }
            }
            ProcessError::AccessDenied { .. } => ProbeError::Denied { pid },
            other => ProbeError::Io {
                pid,
                message: other.to_string(),
            },
        }
    }

    fn from_join(pid: Pid, err: task::JoinError) -> Self {
        ProbeError::Io {
            pid,
            message: format!("probe task failed: {err}"),
        }
    }
}

/// Resident memory and wall-clock age of a process.
#[derive(Debug, Default)]
pub struct PsutilProbe {
    // pid -> process start time since the epoch
    start_times: Mutex<HashMap<Pid, Duration>>,
}

impl PsutilProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cached(&self) -> usize {
        self.start_times.lock().len()
    }
}

#[async_trait]
impl StatsProbe for PsutilProbe {
    async fn stats(&self, pid: Pid) -> ProbeResult<ProcessStats> {
        let known_start = self.start_times.lock().get(&pid).copied();
        let (stats, started) = task::spawn_blocking(move || sample(pid, known_start))
            .await
            .map_err(|err| ProbeError::from_join(pid, err))??;
        self.start_times.lock().insert(pid, started);
        Ok(stats)
    }

    fn clear(&self) {
        let released = {
            let mut start_times = self.start_times.lock();
            let released = start_times.len();
            start_times.clear();
            released
        };
        debug!(released, "stats probe cache cleared");
    }
}

fn sample(pid: Pid, known_start: Option<Duration>) -> ProbeResult<(ProcessStats, Duration)> {
    let process = Process::new(pid).map_err(|err| ProbeError::from_psutil(pid, err))?;
    let memory = process
        .memory_info()
        .map_err(|err| ProbeError::from_psutil(pid, err))?;
    let started = known_start.unwrap_or_else(|| process.create_time());

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let elapsed = now.saturating_sub(started);

    let stats = ProcessStats {
        memory_bytes: memory.rss(),
        elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
    };
    Ok((stats, started))
}

/// Reads the full invocation string of a process.
#[derive(Debug, Default, Clone, Copy)]
pub struct PsutilCommandResolver;

#[async_trait]
impl CommandResolver for PsutilCommandResolver {
    async fn command_line(&self, pid: Pid) -> ProbeResult<String> {
        task::spawn_blocking(move || read_command_line(pid))
            .await
            .map_err(|err| ProbeError::from_join(pid, err))?
    }
}

fn read_command_line(pid: Pid) -> ProbeResult<String> {
    let process = Process::new(pid).map_err(|err| ProbeError::from_psutil(pid, err))?;
    match process.cmdline() {
        Ok(Some(cmdline)) if !cmdline.trim().is_empty() => Ok(cmdline.trim().to_string()),
        Ok(_) => Err(ProbeError::NoCommandLine { pid }),
        Err(err) => Err(ProbeError::from_psutil(pid, err)),
    }
}
