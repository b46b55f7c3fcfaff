//! Unified error handling for exo
//!
//! Every layer of the pipeline owns a small `thiserror` enum. Only the
//! listing phase (and the prompt itself) may abort a run; everything that
//! happens to a single pid is recovered locally by the stage that saw it.

use crate::core::models::Pid;
use std::io;
use thiserror::Error;

/// Failure to turn one listing line into a [`ProcessEntry`](crate::core::models::ProcessEntry).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// The line does not start with `<digits><whitespace>`.
    #[error("Failed to parse listing entry: '{line}'")]
    Parse { line: String },
    /// The leading digits do not fit a pid.
    #[error("pid must be a non-negative integer that fits a pid, got '{value}' in '{line}'")]
    Validation { value: String, line: String },
}

impl EntryError {
    /// The raw line that could not be parsed, verbatim.
    pub fn line(&self) -> &str {
        match self {
            EntryError::Parse { line } | EntryError::Validation { line, .. } => line,
        }
    }
}

/// Typed failure of a per-pid lookup (command line or stats).
///
/// `Exited` is the expected race between listing and enrichment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("process {pid} has exited")]
    Exited { pid: Pid },
    #[error("access denied for process {pid}")]
    Denied { pid: Pid },
    #[error("process {pid} has no command line")]
    NoCommandLine { pid: Pid },
    #[error("probe failed for process {pid}: {message}")]
    Io { pid: Pid, message: String },
}

impl ProbeError {
    pub fn pid(&self) -> Pid {
        match self {
            ProbeError::Exited { pid }
            | ProbeError::Denied { pid }
            | ProbeError::NoCommandLine { pid }
            | ProbeError::Io { pid, .. } => *pid,
        }
    }
}

pub type ProbeResult<T> = Result<T, ProbeError>;

/// Failure to obtain the raw process listing.
#[derive(Error, Debug)]
pub enum ListingError {
    #[error("Command '{binary}' is not found")]
    NotInstalled { binary: String },
    #[error("Failed to run '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: io::Error,
    },
    #[error("'{binary}' exited with status {status:?}: {stderr}")]
    Failed {
        binary: String,
        status: Option<i32>,
        stderr: String,
    },
}

#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("selection prompt needs an interactive terminal")]
    NotInteractive,
    #[error("selection prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Failure to deliver a termination signal. Never surfaced past the
/// terminator beyond a plain failed outcome.
#[derive(Error, Debug)]
pub enum KillError {
    #[error("pid {pid} cannot be signalled safely")]
    InvalidPid { pid: Pid },
    #[error("failed to signal pid {pid}: {source}")]
    Signal {
        pid: Pid,
        #[source]
        source: io::Error,
    },
}

/// Main error type for a run
#[derive(Error, Debug)]
pub enum ExoError {
    #[error(transparent)]
    Entry(#[from] EntryError),
    #[error(transparent)]
    Listing(#[from] ListingError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A required external tool is missing. Not a defect of the run.
    Precondition,
    Parse,
    Validation,
    Listing,
    Interaction,
}

impl ErrorCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ErrorCategory::Precondition => "Precondition",
            ErrorCategory::Parse => "Parse",
            ErrorCategory::Validation => "Validation",
            ErrorCategory::Listing => "Listing",
            ErrorCategory::Interaction => "Interaction",
        }
    }
}

impl ExoError {
    /// Get error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            ExoError::Entry(EntryError::Parse { .. }) => ErrorCategory::Parse,
            ExoError::Entry(EntryError::Validation { .. }) => ErrorCategory::Validation,
            ExoError::Listing(ListingError::NotInstalled { .. }) => ErrorCategory::Precondition,
            ExoError::Listing(_) => ErrorCategory::Listing,
            ExoError::Selection(_) => ErrorCategory::Interaction,
        }
    }

    /// Whether the run should end with a failing exit status.
    pub fn is_fatal(&self) -> bool {
        self.category() != ErrorCategory::Precondition
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_fatal() {
            1
        } else {
            0
        }
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            ExoError::Listing(ListingError::NotInstalled { binary }) => format!(
                "Command '{binary}' is not found. Your PC is innocent, nothing to banish here.\n\
                 If you still think it is possessed by daemons check your PATH variable and re-run exo."
            ),
            ExoError::Entry(err) => format!(
                "{} error in process listing: {err}",
                self.category().display_name()
            ),
            ExoError::Listing(err) => format!("Unable to list JVM processes: {err}"),
            ExoError::Selection(err) => format!("Interface issue: {err}"),
        }
    }
}

/// Result type alias for convenience
pub type ExoResult<T> = Result<T, ExoError>;
