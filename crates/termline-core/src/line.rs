//! Fixed-capacity editable line with in-place redraw.
//!
//! The terminal on the other end only supports writing a byte at the cursor
//! and stepping back with backspace. Any edit away from the end of the line
//! therefore reprints the tail after the cursor and walks the cursor back
//! over it.
//!
//! Invariant: `pos <= len <= capacity - 1`. The last slot is reserved as a
//! terminator and never holds line content.

use termline_platform::Transport;

use crate::BACKSPACE;

/// The line being edited.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    buf: Vec<u8>,
    len: usize,
    pos: usize,
}

impl LineBuffer {
    /// Create an empty line with `capacity` bytes of storage (at least 2).
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity.max(2)],
            len: 0,
            pos: 0,
        }
    }

    /// Storage size, terminator slot included.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Longest line that fits.
    pub fn max_len(&self) -> usize {
        self.buf.len() - 1
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.max_len()
    }

    /// Cursor index, `0..=len`.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Current content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Current content as text. The line only ever holds printable ASCII.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Bytes from the cursor to the end of the line.
    fn tail(&self) -> &[u8] {
        &self.buf[self.pos..self.len]
    }

    /// Copy `src` within the storage so that it starts at `dest`.
    ///
    /// Every shift of line content goes through here.
    fn move_range(&mut self, src: std::ops::Range<usize>, dest: usize) {
        assert!(src.start <= src.end, "inverted range {src:?}");
        assert!(
            src.end <= self.max_len() && dest + src.len() <= self.max_len(),
            "move {src:?} -> {dest} overruns line of {}",
            self.max_len()
        );
        self.buf.copy_within(src, dest);
    }

    /// Reprint the tail and step the cursor back to where it was.
    fn echo_tail(&self, out: &mut dyn Transport) {
        let tail = self.tail();
        for &b in tail {
            out.write_byte(b);
        }
        for _ in tail {
            out.write_byte(BACKSPACE);
        }
    }

    /// Insert a printable byte at the cursor.
    ///
    /// Returns `false`, with no output, when the line is full or the byte is
    /// not printable ASCII.
    pub fn insert(&mut self, byte: u8, out: &mut dyn Transport) -> bool {
        if self.is_full() || !(0x20..=0x7E).contains(&byte) {
            return false;
        }
        self.move_range(self.pos..self.len, self.pos + 1);
        self.buf[self.pos] = byte;
        self.pos += 1;
        self.len += 1;

        out.write_byte(byte);
        self.echo_tail(out);
        true
    }

    /// Delete the byte before the cursor. Returns `false` at the line start.
    pub fn delete_back(&mut self, out: &mut dyn Transport) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.move_range(self.pos..self.len, self.pos - 1);
        self.pos -= 1;
        self.len -= 1;
        self.buf[self.len] = 0;

        out.write_byte(BACKSPACE);
        out.write_byte(b' ');
        out.write_byte(BACKSPACE);
        self.echo_tail(out);
        true
    }

    /// Step the cursor one byte left. Echoes a backspace.
    pub fn move_left(&mut self, out: &mut dyn Transport) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos -= 1;
        out.write_byte(BACKSPACE);
        true
    }

    /// Step the cursor one byte right by overprinting the byte under it.
    pub fn move_right(&mut self, out: &mut dyn Transport) -> bool {
        if self.pos >= self.len {
            return false;
        }
        out.write_byte(self.buf[self.pos]);
        self.pos += 1;
        true
    }

    /// Insert `bytes` at the cursor and leave the cursor after them.
    ///
    /// Produces no output; the caller redraws. Returns `false`, changing
    /// nothing, if the result would not fit.
    pub fn splice(&mut self, bytes: &[u8]) -> bool {
        let new_len = self.len + bytes.len();
        if new_len > self.max_len() || !bytes.iter().all(|b| (0x20..=0x7E).contains(b)) {
            return false;
        }
        let end = self.pos + bytes.len();
        self.move_range(self.pos..self.len, end);
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        self.len = new_len;
        true
    }

    /// Add `bytes` at the end of the line, wherever the cursor is, and leave
    /// the cursor at the new end.
    ///
    /// Same contract as [`splice`](Self::splice): no output, and nothing
    /// changes (cursor included) if the result would not fit.
    pub fn append(&mut self, bytes: &[u8]) -> bool {
        let pos = self.pos;
        self.pos = self.len;
        if self.splice(bytes) {
            true
        } else {
            self.pos = pos;
            false
        }
    }

    /// Empty the line and zero the storage.
    pub fn clear(&mut self) {
        self.buf.fill(0);
        self.len = 0;
        self.pos = 0;
    }

    /// Reprint the prompt and the whole line, then restore the cursor column.
    pub fn redraw(&self, prompt: &str, out: &mut dyn Transport) {
        out.write_str(prompt);
        for &b in self.as_bytes() {
            out.write_byte(b);
        }
        for _ in self.tail() {
            out.write_byte(BACKSPACE);
        }
    }
}
