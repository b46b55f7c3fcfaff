//! 核心数据模型
//!
//! Records handed from one pipeline stage to the next. Each stage consumes
//! its input collection whole and never mutates what it produced.

use colored::Color;

/// Process identifier as reported by the listing utility.
pub type Pid = u32;

/// One validated line of the process listing.
///
/// Only [`ProcessEntry::parse`](crate::core::entry_parser) builds these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEntry {
    pub(crate) pid: Pid,
    pub(crate) label: String,
}

impl ProcessEntry {
    pub fn pid(&self) -> Pid {
        self.pid
    }

    /// Main class or jar path; empty when the listing had nothing after the pid.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Point-in-time resource usage of a single process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStats {
    pub memory_bytes: u64,
    pub elapsed_ms: u64,
}

/// A fully enriched process, eligible for display and selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub pid: Pid,
    pub command_line: String,
    pub memory_bytes: u64,
    pub elapsed_ms: u64,
    /// Presentation hint: pre-check this row in the prompt.
    pub is_likely_target: bool,
}

impl Candidate {
    /// Built only once both the command line and the stats are known.
    pub fn new(pid: Pid, command_line: String, stats: ProcessStats, marker: &str) -> Self {
        let is_likely_target = !marker.is_empty() && command_line.contains(marker);
        Self {
            pid,
            command_line,
            memory_bytes: stats.memory_bytes,
            elapsed_ms: stats.elapsed_ms,
            is_likely_target,
        }
    }
}

/// Memory usage band driving the colour of the memory column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryTier {
    Low,
    Elevated,
    Critical,
}

impl MemoryTier {
    pub fn color(self) -> Color {
        match self {
            MemoryTier::Low => Color::Green,
            MemoryTier::Elevated => Color::Yellow,
            MemoryTier::Critical => Color::Red,
        }
    }
}

/// Row offered to the operator in the selection prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChoice {
    pub display_pid: String,
    pub display_line: String,
    pub value: Pid,
    pub pre_checked: bool,
    pub memory_tier: MemoryTier,
}

/// Result of one termination attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminationOutcome {
    pub pid: Pid,
    pub succeeded: bool,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub listed: usize,
    pub candidates: usize,
    pub selected: usize,
    pub outcomes: Vec<TerminationOutcome>,
}

impl RunReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// How a run ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing survived enrichment, the prompt was never shown.
    NothingToShow { listed: usize },
    Completed(RunReport),
}
