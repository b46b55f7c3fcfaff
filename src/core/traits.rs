//! Seams to the outside world
//!
//! The pipeline only talks to the OS and the terminal through these traits,
//! so every collaborator failure arrives as a typed `Result`.

use crate::core::models::{Pid, ProcessStats, SelectionChoice};
use crate::error::{KillError, ListingError, ProbeResult, SelectionError};
use async_trait::async_trait;

/// Produces the raw process listing, once per run.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn list(&self) -> Result<String, ListingError>;
}

/// Point-in-time resource usage for a pid.
#[async_trait]
pub trait StatsProbe: Send + Sync {
    async fn stats(&self, pid: Pid) -> ProbeResult<ProcessStats>;

    /// Release whatever the probe cached during the run. Called once, at the end.
    fn clear(&self) {}
}

/// Full invocation string for a pid.
#[async_trait]
pub trait CommandResolver: Send + Sync {
    async fn command_line(&self, pid: Pid) -> ProbeResult<String>;
}

/// Interactive multi-choice prompt. Returns the chosen values in display order.
pub trait Selector: Send + Sync {
    fn select(&self, header: &str, choices: &[SelectionChoice])
        -> Result<Vec<Pid>, SelectionError>;
}

/// Sends the OS-level termination request for a pid.
pub trait ProcessKiller: Send + Sync {
    fn terminate(&self, pid: Pid) -> Result<(), KillError>;
}
