//! Byte transport seam
//!
//! The console never touches hardware directly. Hosts implement
//! [`SerialPort`] over whatever carries the bytes (UART, USB CDC, a PTY,
//! a test fixture) and the console drives it one byte at a time.

/// Byte-oriented serial transport.
///
/// The console only calls [`read`](SerialPort::read) after
/// [`available`](SerialPort::available) reported at least one pending byte.
pub trait SerialPort {
    /// Write one byte, returning the number of bytes accepted.
    fn write(&mut self, byte: u8) -> usize;

    /// Read one pending byte.
    fn read(&mut self) -> u8;

    /// Number of bytes ready to read.
    fn available(&self) -> usize;
}

/// Output seam handed to command handlers and the dispatcher.
///
/// Extends `fmt::Write` with a verbatim path: registered help descriptions
/// are emitted byte-for-byte, skipping newline translation.
pub trait ConsoleOutput: core::fmt::Write {
    /// Write a string without newline translation.
    fn write_verbatim(&mut self, s: &str);
}

/// `core::fmt::Write` adapter over a port with cooked newline translation.
///
/// Every `\n` is preceded by `\r` on the wire, so callers keep plain
/// newline semantics.
pub struct CookedWriter<'a, P: SerialPort> {
    port: &'a mut P,
}

impl<'a, P: SerialPort> CookedWriter<'a, P> {
    /// Wrap a port.
    pub fn new(port: &'a mut P) -> Self {
        Self { port }
    }
}

impl<P: SerialPort> core::fmt::Write for CookedWriter<'_, P> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for b in s.bytes() {
            if b == b'\n' {
                self.port.write(b'\r');
            }
            self.port.write(b);
        }
        Ok(())
    }
}

impl<P: SerialPort> ConsoleOutput for CookedWriter<'_, P> {
    fn write_verbatim(&mut self, s: &str) {
        for b in s.bytes() {
            self.port.write(b);
        }
    }
}
