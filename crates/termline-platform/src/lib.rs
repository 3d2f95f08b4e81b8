//! Byte transports for the termline engine.
//!
//! The engine never touches a device directly. It pulls input one byte at a
//! time and pushes output bytes through a [`Transport`].

mod memory;
mod stdio;

/// In-memory transport for tests and scripted sessions.
pub use memory::MemoryTransport;
/// Host terminal transport (raw mode stdin/stdout).
pub use stdio::StdioTransport;

/// A character-oriented byte channel.
///
/// Reads are non-blocking: `None` means no byte is available right now, not
/// end of stream. Writes are infallible from the caller's point of view;
/// implementations report device failures through the log.
pub trait Transport {
    /// Return the next input byte, or `None` if nothing is pending.
    fn read_byte(&mut self) -> Option<u8>;

    /// Emit one byte.
    fn write_byte(&mut self, byte: u8);

    /// Emit every byte of `s`.
    fn write_str(&mut self, s: &str) {
        for b in s.bytes() {
            self.write_byte(b);
        }
    }

    /// Push buffered output to the device.
    fn flush(&mut self) {}
}
