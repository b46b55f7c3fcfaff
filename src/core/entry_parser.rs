//! Listing line parsing
//!
//! A listing line is `<pid><whitespace><label>`; the label may be missing
//! (`jps` prints a bare pid when it cannot attach to the VM).

use crate::core::models::{Pid, ProcessEntry};
use crate::error::EntryError;
use once_cell::sync::Lazy;
use regex::Regex;

static ENTRY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)(?:\s+(.*))?$").expect("regex"));

impl ProcessEntry {
    /// Parse one already-trimmed, non-empty listing line.
    pub fn parse(raw_line: &str) -> Result<Self, EntryError> {
        let captures = ENTRY_PATTERN
            .captures(raw_line)
            .ok_or_else(|| EntryError::Parse {
                line: raw_line.to_string(),
            })?;

        let digits = &captures[1];
        let pid: Pid = digits.parse().map_err(|_| EntryError::Validation {
            value: digits.to_string(),
            line: raw_line.to_string(),
        })?;
        let label = captures
            .get(2)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        Ok(Self { pid, label })
    }
}

/// Parse a whole listing. Lines are trimmed and blank ones skipped; the
/// first malformed line aborts the lot.
pub fn parse_listing(raw: &str) -> Result<Vec<ProcessEntry>, EntryError> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ProcessEntry::parse)
        .collect()
}
