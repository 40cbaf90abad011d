//! Serial command console for the RGB LED
//!
//! One blocking iteration per prompt - no dedicated task.
//! Zero heap allocation - all static buffers.

pub mod commands;
pub mod error;
pub mod shell;

pub use commands::{command_names, execute, COMMANDS};
pub use error::ConsoleError;
pub use shell::Shell;
