//! Shared test doubles for the blocking-I/O contract

#![allow(dead_code)]

use std::collections::VecDeque;

use launchpad_console::{BoundedSpin, RgbLed, SerialPort, Transport};

/// Transport fed from a fixed receive script; transmitted bytes are
/// captured for assertions.
pub struct ScriptedTransport {
    rx: VecDeque<u8>,
    pub tx: Vec<u8>,
}

impl ScriptedTransport {
    pub fn new(script: &[u8]) -> Self {
        Self {
            rx: script.iter().copied().collect(),
            tx: Vec::new(),
        }
    }

    pub fn tx_string(&self) -> String {
        String::from_utf8_lossy(&self.tx).into_owned()
    }
}

impl Transport for ScriptedTransport {
    fn transmit_ready(&mut self) -> bool {
        true
    }

    fn receive_ready(&mut self) -> bool {
        !self.rx.is_empty()
    }

    fn read_raw_byte(&mut self) -> u8 {
        self.rx.pop_front().unwrap_or(0)
    }

    fn write_raw_byte(&mut self, byte: u8) {
        self.tx.push(byte);
    }
}

/// Transport that never becomes ready in either direction.
pub struct SilentTransport;

impl Transport for SilentTransport {
    fn transmit_ready(&mut self) -> bool {
        false
    }

    fn receive_ready(&mut self) -> bool {
        false
    }

    fn read_raw_byte(&mut self) -> u8 {
        unreachable!("read after receive_ready returned false")
    }

    fn write_raw_byte(&mut self, _byte: u8) {
        unreachable!("write after transmit_ready returned false")
    }
}

/// Port over a scripted transport with a generous poll budget, so a
/// test that misses a terminator fails instead of hanging.
pub fn scripted_port(script: &[u8]) -> SerialPort<ScriptedTransport, BoundedSpin> {
    SerialPort::new(ScriptedTransport::new(script), BoundedSpin::new(10_000))
}

/// LED action recorded by [`RecordingLed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedCall {
    SetColor(bool, bool, bool),
    Cycle,
    Off,
}

/// LED double that records every action.
#[derive(Default)]
pub struct RecordingLed {
    pub calls: Vec<LedCall>,
}

impl RgbLed for RecordingLed {
    fn set_color(&mut self, red: bool, green: bool, blue: bool) {
        self.calls.push(LedCall::SetColor(red, green, blue));
    }

    fn cycle(&mut self) {
        self.calls.push(LedCall::Cycle);
    }

    fn off(&mut self) {
        self.calls.push(LedCall::Off);
    }
}
