//! Byte-transport capability consumed by the driver.
//!
//! One-time peripheral setup (clock gating, baud rate, pin mux) happens
//! before a transport is handed to a [`SerialPort`](crate::SerialPort)
//! and is not part of this contract. The driver never touches hardware
//! registers directly; it only polls the two readiness flags and moves
//! single bytes.

/// Blocking byte transport over a UART-like peripheral.
///
/// A transport instance is exclusively owned by one driver instance.
/// Two peripherals are two independent `Transport` values; they share
/// no state and need no locking.
pub trait Transport {
    /// True when the transmit path can accept one byte.
    fn transmit_ready(&mut self) -> bool;

    /// True when one received byte is available.
    fn receive_ready(&mut self) -> bool;

    /// Read one received byte.
    ///
    /// Only valid after `receive_ready` returned true.
    fn read_raw_byte(&mut self) -> u8;

    /// Write one byte to the transmit path.
    ///
    /// Only valid after `transmit_ready` returned true.
    fn write_raw_byte(&mut self, byte: u8);
}
