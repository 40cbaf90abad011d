//! Blocking prompt/dispatch loop body

use super::commands::execute;
use crate::error::SerialError;
use crate::led::RgbLed;
use crate::serial::SerialPort;
use crate::transport::Transport;
use crate::wait::WaitStrategy;

/// Line buffer size, terminator byte included.
pub const LINE_SIZE: usize = 64;

/// Prompt printed before each line.
pub const PROMPT: &str = "Enter command: ";

/// Response for a line that names no command.
pub const INVALID: &str = "Invalid command. \r\n";

/// Console shell owning its line buffer.
///
/// The control loop calls [`Shell::run_once`] forever; each call is one
/// prompt, one echoed line, one dispatch. Input that is not valid UTF-8
/// cannot name a command and gets the invalid-command response.
pub struct Shell {
    line: [u8; LINE_SIZE],
}

impl Shell {
    /// Create a shell with an empty line buffer.
    pub const fn new() -> Self {
        Self {
            line: [0u8; LINE_SIZE],
        }
    }

    /// Run one prompt/read/dispatch iteration.
    pub fn run_once<T, W>(
        &mut self,
        port: &mut SerialPort<T, W>,
        led: &mut dyn RgbLed,
    ) -> Result<(), SerialError>
    where
        T: Transport,
        W: WaitStrategy,
    {
        port.write_string(PROMPT)?;
        let stored = port.read_line(&mut self.line)?;
        port.write_newline()?;

        let line = core::str::from_utf8(&self.line[..stored]).unwrap_or("");
        if execute(line, led, &mut *port).is_err() {
            port.write_string(INVALID)?;
        }
        Ok(())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
