//! Command handlers

use core::fmt::Write;

use heapless::String;

use super::error::ConsoleError;
use super::shell::LINE_SIZE;
use crate::led::RgbLed;

/// Command descriptor
pub struct CommandDescriptor {
    pub name: &'static str,
    pub brief: &'static str,
    pub handler: fn(&mut dyn RgbLed, &mut dyn Write) -> Result<(), ConsoleError>,
}

/// All available commands
pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor { name: "RED", brief: "Turn on Red LED", handler: cmd_red },
    CommandDescriptor { name: "GREEN", brief: "Turn on Green LED", handler: cmd_green },
    CommandDescriptor { name: "BLUE", brief: "Turn on Blue LED", handler: cmd_blue },
    CommandDescriptor { name: "CYCLE", brief: "RGB LED cycle", handler: cmd_cycle },
    CommandDescriptor { name: "OFF", brief: "Turn off RGB LED", handler: cmd_off },
    CommandDescriptor { name: "HELP", brief: "List commands", handler: cmd_help },
];

/// Execute one command line.
///
/// Matching is case-insensitive: the line is normalized to upper case
/// before lookup, so `red` hits the same branch as `RED`. A line too
/// long to normalize cannot name any command and is unknown.
pub fn execute(
    line: &str,
    led: &mut dyn RgbLed,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    let mut normalized: String<LINE_SIZE> = String::new();
    if normalized.push_str(line).is_err() {
        return Err(ConsoleError::UnknownCommand);
    }
    normalized.as_mut_str().make_ascii_uppercase();

    let descriptor = COMMANDS
        .iter()
        .find(|c| c.name == normalized.as_str())
        .ok_or(ConsoleError::UnknownCommand)?;

    (descriptor.handler)(led, out)
}

/// Get all command names
pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|c| c.name)
}

// --- Command Implementations ---

fn cmd_red(led: &mut dyn RgbLed, out: &mut dyn Write) -> Result<(), ConsoleError> {
    led.set_color(true, false, false);
    let _ = write!(out, "RGB LED RED\r\n");
    Ok(())
}

fn cmd_green(led: &mut dyn RgbLed, out: &mut dyn Write) -> Result<(), ConsoleError> {
    led.set_color(false, true, false);
    let _ = write!(out, "RGB LED GREEN\r\n");
    Ok(())
}

fn cmd_blue(led: &mut dyn RgbLed, out: &mut dyn Write) -> Result<(), ConsoleError> {
    led.set_color(false, false, true);
    let _ = write!(out, "RGB LED BLUE\r\n");
    Ok(())
}

fn cmd_cycle(led: &mut dyn RgbLed, out: &mut dyn Write) -> Result<(), ConsoleError> {
    led.cycle();
    let _ = write!(out, "RGB LED cycle\r\n");
    Ok(())
}

fn cmd_off(led: &mut dyn RgbLed, _out: &mut dyn Write) -> Result<(), ConsoleError> {
    led.off();
    Ok(())
}

fn cmd_help(_led: &mut dyn RgbLed, out: &mut dyn Write) -> Result<(), ConsoleError> {
    let _ = write!(out, "\r\nAvailable Commands:\r\n");
    for c in COMMANDS {
        let _ = write!(out, "{:<6} - {}\r\n", c.name, c.brief);
    }
    Ok(())
}
