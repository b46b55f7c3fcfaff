//! Termination of the chosen pids
//!
//! One signal per pid, no retries. Progress is written as each attempt
//! finishes so the operator sees it live.

use crate::core::models::{Pid, TerminationOutcome};
use crate::core::traits::ProcessKiller;
use colored::Colorize;
use std::io::Write;
use tracing::{debug, info};

pub struct Terminator<'a, W: Write> {
    killer: &'a dyn ProcessKiller,
    out: W,
}

impl<'a, W: Write> Terminator<'a, W> {
    pub fn new(killer: &'a dyn ProcessKiller, out: W) -> Self {
        Self { killer, out }
    }

    /// One outcome per pid, in the order given.
    pub fn terminate<I>(&mut self, pids: I) -> Vec<TerminationOutcome>
    where
        I: IntoIterator<Item = Pid>,
    {
        pids.into_iter().map(|pid| self.terminate_one(pid)).collect()
    }

    fn terminate_one(&mut self, pid: Pid) -> TerminationOutcome {
        self.status(format_args!("Killing pid={pid}..."));

        let succeeded = match self.killer.terminate(pid) {
            Ok(()) => {
                info!(pid, "termination signal delivered");
                true
            }
            Err(err) => {
                debug!(pid, error = %err, "termination signal rejected");
                false
            }
        };

        if succeeded {
            self.status(format_args!("{}\n", " OK".green()));
        } else {
            self.status(format_args!("{}\n", " ERROR".red()));
        }

        TerminationOutcome { pid, succeeded }
    }

    // Console hiccups must not stop the remaining terminations.
    fn status(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(err) = self.out.write_fmt(args).and_then(|_| self.out.flush()) {
            debug!(error = %err, "failed to write termination status");
        }
    }
}
