//! # LaunchpadConsole
//!
//! Polled serial line console for LaunchPad-class boards.
//!
//! ## Architecture
//!
//! The driver is a pure stream transformer over an injected byte
//! transport. Layers are isolated:
//! - [`Transport`] owns the hardware status/data registers
//! - [`SerialPort`] turns the byte transport into line and number I/O
//! - The console layer dispatches CR-terminated lines to LED actions
//!
//! No heap, no interrupts, no shared state. One transport, one port,
//! one caller, strictly sequential.

#![cfg_attr(not(test), no_std)]

pub mod console;
pub mod error;
pub mod led;
pub mod line;
pub mod serial;
pub mod transport;
pub mod wait;

pub use console::{execute, ConsoleError, Shell, COMMANDS};
pub use error::SerialError;
pub use led::RgbLed;
pub use line::LineEditor;
pub use serial::{SerialPort, BS, CR, LF};
pub use transport::Transport;
pub use wait::{BoundedSpin, Spin, WaitStrategy};
