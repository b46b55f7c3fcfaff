//! Presentation of candidates for the selection prompt
//!
//! Pure: no I/O, output depends on the input alone. Rows read
//! `   pid |    elapsed |   memory | command`, longest-running first.

use crate::config::{
    COMMAND_MAX_CHARS, ELAPSED_UNIT_COUNT, ELAPSED_WIDTH, MEMORY_RED_ABOVE, MEMORY_WIDTH,
    MEMORY_YELLOW_FROM, PID_WIDTH,
};
use crate::core::models::{Candidate, MemoryTier, SelectionChoice};
use crate::utils::format::{format_bytes, format_duration_ms, truncate_chars};
use colored::Colorize;
use std::cmp::Ordering;

/// Display order: longest elapsed time first.
///
/// Equal elapsed times compare `Equal`, and the sort below is stable, so
/// ties keep the order the enricher produced them in.
pub fn by_elapsed_desc(a: &Candidate, b: &Candidate) -> Ordering {
    b.elapsed_ms.cmp(&a.elapsed_ms)
}

/// Red is checked first; see `MEMORY_RED_ABOVE` / `MEMORY_YELLOW_FROM`.
pub fn memory_tier(memory_bytes: u64) -> MemoryTier {
    if memory_bytes > MEMORY_RED_ABOVE {
        MemoryTier::Critical
    } else if memory_bytes >= MEMORY_YELLOW_FROM {
        MemoryTier::Elevated
    } else {
        MemoryTier::Low
    }
}

/// Truncated command line, followed by the highlighted tail starting at the
/// last `/` so the executable name is always readable.
pub fn format_command(command_line: &str) -> String {
    let head = truncate_chars(command_line, COMMAND_MAX_CHARS);
    match command_line.rfind('/') {
        Some(split_at) => format!("{head}{}", command_line[split_at..].green()),
        None => head,
    }
}

pub fn format_row(candidate: &Candidate) -> String {
    let tier = memory_tier(candidate.memory_bytes);
    let memory = format!("{:>MEMORY_WIDTH$}", format_bytes(candidate.memory_bytes));
    format!(
        "{:>PID_WIDTH$} | {:>ELAPSED_WIDTH$} | {} | {}",
        candidate.pid,
        format_duration_ms(candidate.elapsed_ms, ELAPSED_UNIT_COUNT),
        memory.color(tier.color()),
        format_command(&candidate.command_line),
    )
}

pub fn present(mut candidates: Vec<Candidate>) -> Vec<SelectionChoice> {
    candidates.sort_by(by_elapsed_desc);
    candidates
        .iter()
        .map(|candidate| SelectionChoice {
            display_pid: candidate.pid.to_string(),
            display_line: format_row(candidate),
            value: candidate.pid,
            pre_checked: candidate.is_likely_target,
            memory_tier: memory_tier(candidate.memory_bytes),
        })
        .collect()
}
