//! Wait strategies for the readiness busy-wait.
//!
//! Every driver primitive blocks on a transport readiness flag. The
//! strategy decides how: spin forever (the embedded default, where the
//! control loop has nothing else to do) or give up after a poll budget
//! (for hosted use, where an unready peripheral must not hang the
//! process).

use crate::error::SerialError;

/// Policy for blocking until a readiness predicate holds.
pub trait WaitStrategy {
    /// Block until `ready` returns true.
    fn wait_ready(&mut self, ready: impl FnMut() -> bool) -> Result<(), SerialError>;
}

/// Spin forever. Never errors.
///
/// A flag that never becomes ready hangs the caller; acceptable only in
/// a single polling control loop with no preemption.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spin;

impl WaitStrategy for Spin {
    fn wait_ready(&mut self, mut ready: impl FnMut() -> bool) -> Result<(), SerialError> {
        while !ready() {
            core::hint::spin_loop();
        }
        Ok(())
    }
}

/// Spin up to a fixed number of polls, then fail with
/// [`SerialError::TransportTimeout`].
#[derive(Clone, Copy, Debug)]
pub struct BoundedSpin {
    max_polls: u32,
}

impl BoundedSpin {
    /// Create a strategy that gives up after `max_polls` polls.
    pub const fn new(max_polls: u32) -> Self {
        Self { max_polls }
    }
}

impl WaitStrategy for BoundedSpin {
    fn wait_ready(&mut self, mut ready: impl FnMut() -> bool) -> Result<(), SerialError> {
        for _ in 0..self.max_polls {
            if ready() {
                return Ok(());
            }
            core::hint::spin_loop();
        }
        Err(SerialError::TransportTimeout)
    }
}
