//! Real-signal termination tests
//!
//! Spawns a throwaway `sleep` child and terminates it next to a pid that
//! cannot exist.

#![cfg(unix)]

use exo::core::terminator::Terminator;
use exo::platform::SignalKiller;
use exo::TerminationOutcome;
use pretty_assertions::assert_eq;
use std::os::unix::process::ExitStatusExt;
use std::process::Command;

// Larger than any pid_max the kernel accepts.
const GONE: u32 = i32::MAX as u32;

#[test]
fn gone_pid_fails_and_live_pid_is_terminated() {
    let mut child = Command::new("sleep")
        .arg("30")
        .spawn()
        .expect("spawn sleep");
    let live = child.id();

    let mut out = Vec::new();
    let outcomes = Terminator::new(&SignalKiller, &mut out).terminate([GONE, live]);

    assert_eq!(
        outcomes,
        vec![
            TerminationOutcome {
                pid: GONE,
                succeeded: false
            },
            TerminationOutcome {
                pid: live,
                succeeded: true
            },
        ]
    );

    let status = child.wait().expect("wait for sleep");
    assert_eq!(status.signal(), Some(15));

    let printed = String::from_utf8(out).unwrap();
    let plain = console::strip_ansi_codes(&printed);
    assert!(plain.contains(&format!("Killing pid={GONE}... ERROR")));
    assert!(plain.contains(&format!("Killing pid={live}... OK")));
}

#[test]
fn unsafe_pids_are_reported_as_failures() {
    let mut out = Vec::new();
    let outcomes = Terminator::new(&SignalKiller, &mut out).terminate([0, u32::MAX]);
    assert!(outcomes.iter().all(|o| !o.succeeded));
    assert_eq!(outcomes.len(), 2);
}
