//! In-memory transport.

use std::collections::VecDeque;

use crate::Transport;

/// Transport backed by an input queue and an output buffer.
///
/// Input bytes are handed out in the order they were pushed; everything the
/// engine writes is captured for inspection.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    input: VecDeque<u8>,
    output: Vec<u8>,
}

impl MemoryTransport {
    /// Create an empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue raw bytes as pending input.
    pub fn push_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes);
    }

    /// Number of input bytes not yet read.
    pub fn pending(&self) -> usize {
        self.input.len()
    }

    /// Everything written so far.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Output decoded as text, with invalid UTF-8 replaced.
    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Drain and return the captured output.
    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }
}

impl Transport for MemoryTransport {
    fn read_byte(&mut self) -> Option<u8> {
        self.input.pop_front()
    }

    fn write_byte(&mut self, byte: u8) {
        self.output.push(byte);
    }

    fn write_str(&mut self, s: &str) {
        self.output.extend_from_slice(s.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reads_none() {
        let mut t = MemoryTransport::new();
        assert_eq!(t.read_byte(), None);
        assert_eq!(t.pending(), 0);
    }

    #[test]
    fn input_is_fifo() {
        let mut t = MemoryTransport::new();
        t.push_input(b"ab");
        t.push_input(b"c");
        assert_eq!(t.pending(), 3);
        assert_eq!(t.read_byte(), Some(b'a'));
        assert_eq!(t.read_byte(), Some(b'b'));
        assert_eq!(t.read_byte(), Some(b'c'));
        assert_eq!(t.read_byte(), None);
    }

    #[test]
    fn output_is_captured() {
        let mut t = MemoryTransport::new();
        t.write_byte(b'x');
        t.write_str("yz");
        assert_eq!(t.output(), b"xyz");
        assert_eq!(t.output_str(), "xyz");
    }

    #[test]
    fn take_output_drains() {
        let mut t = MemoryTransport::new();
        t.write_str("hello");
        assert_eq!(t.take_output(), b"hello");
        assert!(t.output().is_empty());
    }

    #[test]
    fn output_str_is_lossy() {
        let mut t = MemoryTransport::new();
        t.write_byte(0xFF);
        assert_eq!(t.output_str(), "\u{FFFD}");
    }
}
