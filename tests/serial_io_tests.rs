//! Serial port byte, string and line I/O tests

mod common;

use core::fmt::Write;

use common::{scripted_port, SilentTransport};
use launchpad_console::{BoundedSpin, SerialError, SerialPort, BS, CR};

#[test]
fn test_read_byte_returns_scripted_byte() {
    let mut port = scripted_port(b"A");

    assert_eq!(port.read_byte().unwrap(), b'A');
}

#[test]
fn test_read_byte_times_out_on_silent_transport() {
    let mut port = SerialPort::new(SilentTransport, BoundedSpin::new(100));

    assert_eq!(port.read_byte(), Err(SerialError::TransportTimeout));
}

#[test]
fn test_write_byte_times_out_on_silent_transport() {
    let mut port = SerialPort::new(SilentTransport, BoundedSpin::new(100));

    assert_eq!(port.write_byte(b'x'), Err(SerialError::TransportTimeout));
}

#[test]
fn test_write_string_sends_every_byte() {
    let mut port = scripted_port(b"");

    port.write_string("Enter command: ").unwrap();

    assert_eq!(port.into_inner().tx, b"Enter command: ");
}

#[test]
fn test_write_newline_is_cr_lf() {
    let mut port = scripted_port(b"");

    port.write_newline().unwrap();

    assert_eq!(port.into_inner().tx, b"\r\n");
}

#[test]
fn test_read_line_stores_and_echoes() {
    let mut port = scripted_port(b"red\r");
    let mut buf = [0u8; 64];

    let len = port.read_line(&mut buf).unwrap();

    assert_eq!(len, 3);
    assert_eq!(&buf[..4], b"red\0");
    // CR is consumed but not echoed
    assert_eq!(port.into_inner().tx, b"red");
}

#[test]
fn test_read_line_backspace_edits_and_echoes() {
    let mut port = scripted_port(b"rwd\x08\x08ed\r");
    let mut buf = [0u8; 64];

    let len = port.read_line(&mut buf).unwrap();

    assert_eq!(&buf[..len], b"red");
    assert_eq!(port.into_inner().tx, b"rwd\x08\x08ed");
}

#[test]
fn test_read_line_backspace_on_empty_is_silent() {
    let mut port = scripted_port(&[BS, BS, b'o', b'k', CR]);
    let mut buf = [0u8; 64];

    let len = port.read_line(&mut buf).unwrap();

    assert_eq!(&buf[..len], b"ok");
    // no echo for the two no-op backspaces
    assert_eq!(port.into_inner().tx, b"ok");
}

#[test]
fn test_read_line_drops_input_past_capacity() {
    // Data capacity 5, terminator byte reserved
    let mut port = scripted_port(b"HELLOWORLD\r");
    let mut buf = [0u8; 6];

    let len = port.read_line(&mut buf).unwrap();

    assert_eq!(len, 5);
    assert_eq!(&buf, b"HELLO\0");
    assert_eq!(port.dropped_bytes(), 5);
    // dropped bytes are consumed but never echoed
    assert_eq!(port.into_inner().tx, b"HELLO");
}

#[test]
fn test_read_line_consumes_trailing_input_after_full() {
    let mut port = scripted_port(b"HELLOWORLD\rnext");
    let mut buf = [0u8; 6];

    port.read_line(&mut buf).unwrap();

    // everything up to and including CR was consumed, the rest remains
    assert_eq!(port.read_byte().unwrap(), b'n');
}

#[test]
fn test_read_line_empty_line() {
    let mut port = scripted_port(&[CR]);
    let mut buf = [0u8; 8];

    let len = port.read_line(&mut buf).unwrap();

    assert_eq!(len, 0);
    assert_eq!(buf[0], 0);
    assert!(port.into_inner().tx.is_empty());
}

#[test]
fn test_fmt_write_goes_through_port() {
    let mut port = scripted_port(b"");

    write!(port, "value={}", 42).unwrap();

    assert_eq!(port.into_inner().tx, b"value=42");
}

#[test]
fn test_dropped_counter_starts_at_zero() {
    let port = scripted_port(b"");

    assert_eq!(port.dropped_bytes(), 0);
}
