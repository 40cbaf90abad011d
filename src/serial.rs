//! Line-oriented serial driver
//!
//! Turns a byte-blocking [`Transport`] into line and number I/O with
//! interactive local echo: every accepted keystroke is echoed back, and
//! backspace is honored so a terminal at the far end visually erases
//! the character. All reads terminate on CR; the CR itself is consumed
//! but never stored or echoed.

use core::fmt;

use crate::error::SerialError;
use crate::line::LineEditor;
use crate::transport::Transport;
use crate::wait::WaitStrategy;

/// Carriage return, the line terminator.
pub const CR: u8 = 0x0D;

/// Line feed, emitted after CR by [`SerialPort::write_newline`].
pub const LF: u8 = 0x0A;

/// Backspace, the only edit byte.
pub const BS: u8 = 0x08;

/// Polled serial port over an exclusively owned transport.
///
/// Calls are sequential, single-caller only. Each blocking primitive
/// defers to the wait strategy, so the same driver spins forever on a
/// bare-metal target and times out under a hosted test harness.
pub struct SerialPort<T, W> {
    transport: T,
    wait: W,
    dropped: u32,
}

impl<T: Transport, W: WaitStrategy> SerialPort<T, W> {
    /// Take exclusive ownership of a configured transport.
    pub fn new(transport: T, wait: W) -> Self {
        Self {
            transport,
            wait,
            dropped: 0,
        }
    }

    /// Release the transport.
    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Bytes consumed but discarded by policy since construction:
    /// input past a full line buffer and non-digit bytes during a
    /// numeric parse. Wraps on overflow.
    pub fn dropped_bytes(&self) -> u32 {
        self.dropped
    }

    /// Block until a byte is available, then return it.
    pub fn read_byte(&mut self) -> Result<u8, SerialError> {
        let transport = &mut self.transport;
        self.wait.wait_ready(|| transport.receive_ready())?;
        Ok(transport.read_raw_byte())
    }

    /// Block until the transmit path has space, then send `byte`.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), SerialError> {
        let transport = &mut self.transport;
        self.wait.wait_ready(|| transport.transmit_ready())?;
        transport.write_raw_byte(byte);
        Ok(())
    }

    /// Read a CR-terminated line into `buf` with local echo and
    /// backspace editing.
    ///
    /// The last byte of `buf` is reserved for the NUL terminator;
    /// everything up to it is data capacity. Bytes arriving once the
    /// buffer is full are consumed and dropped without echo. Returns
    /// the number of data bytes stored.
    pub fn read_line(&mut self, buf: &mut [u8]) -> Result<usize, SerialError> {
        let mut editor = LineEditor::new(buf);
        loop {
            let byte = self.read_byte()?;
            match byte {
                CR => break,
                BS => {
                    if editor.backspace() {
                        self.write_byte(BS)?;
                    }
                }
                _ => {
                    if editor.push(byte) {
                        self.write_byte(byte)?;
                    } else {
                        self.dropped = self.dropped.wrapping_add(1);
                    }
                }
            }
        }
        Ok(editor.finish())
    }

    /// Write every byte of `s` in order.
    pub fn write_string(&mut self, s: &str) -> Result<(), SerialError> {
        for byte in s.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Read a base-10 unsigned number, terminated by CR.
    ///
    /// Digits accumulate with echo; backspace divides the last digit
    /// out (echoed only when at least one digit was accepted); any
    /// other byte is consumed and ignored. Accumulation wraps on
    /// overflow.
    pub fn read_unsigned_decimal(&mut self) -> Result<u32, SerialError> {
        let mut value: u32 = 0;
        let mut digits: usize = 0;
        loop {
            let byte = self.read_byte()?;
            match byte {
                CR => return Ok(value),
                b'0'..=b'9' => {
                    value = value.wrapping_mul(10).wrapping_add(u32::from(byte - b'0'));
                    digits += 1;
                    self.write_byte(byte)?;
                }
                BS => {
                    if digits > 0 {
                        value /= 10;
                        digits -= 1;
                        self.write_byte(BS)?;
                    }
                }
                _ => self.dropped = self.dropped.wrapping_add(1),
            }
        }
    }

    /// Read a base-16 unsigned number, terminated by CR.
    ///
    /// Same structure as the decimal parse; digits are `0-9`, `A-F`
    /// and `a-f`, backspace divides by 16.
    pub fn read_unsigned_hexadecimal(&mut self) -> Result<u32, SerialError> {
        let mut value: u32 = 0;
        let mut digits: usize = 0;
        loop {
            let byte = self.read_byte()?;
            if byte == CR {
                return Ok(value);
            }
            if let Some(digit) = hex_digit(byte) {
                value = value.wrapping_mul(0x10).wrapping_add(digit);
                digits += 1;
                self.write_byte(byte)?;
            } else if byte == BS {
                if digits > 0 {
                    value /= 0x10;
                    digits -= 1;
                    self.write_byte(BS)?;
                }
            } else {
                self.dropped = self.dropped.wrapping_add(1);
            }
        }
    }

    /// Write `n` in base 10, most significant digit first, no leading
    /// zeros. Zero emits the single byte `'0'`.
    ///
    /// Recursion depth is bounded by the digit count of `u32::MAX`.
    pub fn write_unsigned_decimal(&mut self, n: u32) -> Result<(), SerialError> {
        if n >= 10 {
            self.write_unsigned_decimal(n / 10)?;
        }
        self.write_byte(b'0' + (n % 10) as u8)
    }

    /// Write `n` in base 16, upper-case digits, no leading zeros.
    pub fn write_unsigned_hexadecimal(&mut self, n: u32) -> Result<(), SerialError> {
        if n >= 0x10 {
            self.write_unsigned_hexadecimal(n / 0x10)?;
        }
        let digit = (n % 0x10) as u8;
        self.write_byte(if digit < 0xA {
            b'0' + digit
        } else {
            b'A' + (digit - 0xA)
        })
    }

    /// Emit CR followed by LF.
    pub fn write_newline(&mut self) -> Result<(), SerialError> {
        self.write_byte(CR)?;
        self.write_byte(LF)
    }
}

impl<T: Transport, W: WaitStrategy> fmt::Write for SerialPort<T, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_string(s).map_err(|_| fmt::Error)
    }
}

fn hex_digit(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some(u32::from(byte - b'0')),
        b'A'..=b'F' => Some(u32::from(byte - b'A') + 0xA),
        b'a'..=b'f' => Some(u32::from(byte - b'a') + 0xA),
        _ => None,
    }
}
