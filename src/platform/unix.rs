use crate::core::models::Pid;
use crate::core::traits::ProcessKiller;
use crate::error::KillError;
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid as NixPid;
use std::io;

/// Sends `SIGTERM`. Fire-and-forget: delivery is all that is checked.
#[derive(Debug, Default, Clone, Copy)]
pub struct SignalKiller;

impl ProcessKiller for SignalKiller {
    fn terminate(&self, pid: Pid) -> Result<(), KillError> {
        let raw = signal_target(pid)?;
        kill(NixPid::from_raw(raw), Signal::SIGTERM).map_err(|errno| KillError::Signal {
            pid,
            source: io::Error::from(errno),
        })
    }
}

/// Only plain positive pids are signalled: 0 addresses our own process
/// group and anything past `i32::MAX` wraps to a negative group id.
fn signal_target(pid: Pid) -> Result<i32, KillError> {
    i32::try_from(pid)
        .ok()
        .filter(|raw| *raw > 0)
        .ok_or(KillError::InvalidPid { pid })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_group_addressing_pids() {
        assert!(matches!(
            signal_target(0),
            Err(KillError::InvalidPid { pid: 0 })
        ));
        assert!(matches!(
            signal_target(u32::MAX),
            Err(KillError::InvalidPid { .. })
        ));
        assert_eq!(signal_target(4242).unwrap(), 4242);
    }

    #[test]
    fn missing_process_is_an_error() {
        // Beyond any pid_max the kernel allows.
        let err = SignalKiller.terminate(i32::MAX as u32).unwrap_err();
        assert!(matches!(err, KillError::Signal { pid, .. } if pid == i32::MAX as u32));
    }

    #[test]
    fn invalid_pid_is_never_signalled() {
        assert!(matches!(
            SignalKiller.terminate(0),
            Err(KillError::InvalidPid { pid: 0 })
        ));
    }
}
