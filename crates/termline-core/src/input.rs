//! Byte-at-a-time input decoding.
//!
//! Turns the raw byte stream into editing keys. The only multi-byte sequences
//! understood are the ANSI cursor keys (`ESC [ A` .. `ESC [ D`); any other
//! escape sequence is dropped after its second byte.

const ESC: u8 = 0x1B;
const DEL: u8 = 0x7F;

/// Escape-sequence progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// Plain input.
    #[default]
    Normal,
    /// Saw `ESC`.
    Escape,
    /// Saw `ESC [`.
    Csi,
}

/// A decoded key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable ASCII byte.
    Char(u8),
    /// Backspace or DEL.
    Backspace,
    Tab,
    /// CR or LF.
    Enter,
    Left,
    Right,
    Up,
    Down,
}

/// Escape-sequence state machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputDecoder {
    state: InputState,
}

impl InputDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InputState {
        self.state
    }

    /// Consume one byte. Returns the key it completes, if any.
    pub fn feed(&mut self, byte: u8) -> Option<Key> {
        match self.state {
            InputState::Normal => match byte {
                ESC => {
                    self.state = InputState::Escape;
                    None
                },
                b'\r' | b'\n' => Some(Key::Enter),
                crate::BACKSPACE | DEL => Some(Key::Backspace),
                b'\t' => Some(Key::Tab),
                0x20..=0x7E => Some(Key::Char(byte)),
                _ => None,
            },
            InputState::Escape => {
                self.state = if byte == b'[' {
                    InputState::Csi
                } else {
                    InputState::Normal
                };
                None
            },
            InputState::Csi => {
                self.state = InputState::Normal;
                match byte {
                    b'A' => Some(Key::Up),
                    b'B' => Some(Key::Down),
                    b'C' => Some(Key::Right),
                    b'D' => Some(Key::Left),
                    _ => None,
                }
            },
        }
    }
}
