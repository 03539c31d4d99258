//! Byte-level key decoding for the navigator
//!
//! An explicit state machine over raw input bytes replaces the legacy
//! accumulate-and-compare buffer matching: only the exact 3-byte sequences
//! `ESC [ C` / `ESC [ D` decode as arrow keys, and any byte that breaks a
//! pending escape sequence falls back to literal handling. Escape-sequence
//! bytes therefore never leak into the numeric jump buffer.

/// A decoded navigation key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit of a jump-to-cycle command
    Digit(char),
    /// Carriage return: commit the jump buffer
    Enter,
    /// Left arrow: retreat one cycle
    Left,
    /// Right arrow: advance one cycle
    Right,
    /// `q` or ctrl-C: end the session
    Quit,
    /// Any other literal byte; accumulates in the jump buffer and fails the
    /// numeric parse there
    Other(char),
}

/// Decoder states for multi-byte escape sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DecodeState {
    #[default]
    Idle,
    SawEsc,
    SawEscBracket,
}

/// Stateful decoder turning raw input bytes into [`Key`]s
#[derive(Debug, Default)]
pub struct KeyDecoder {
    state: DecodeState,
}

impl KeyDecoder {
    /// Create a decoder in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw byte; returns a key once one is complete.
    ///
    /// Escape-sequence prefixes return `None` until the sequence either
    /// completes as an arrow key or breaks, in which case the breaking byte
    /// is re-dispatched as a literal key.
    pub fn feed(&mut self, byte: u8) -> Option<Key> {
        match self.state {
            DecodeState::Idle => match byte {
                0x1b => {
                    self.state = DecodeState::SawEsc;
                    None
                }
                b'q' | 0x03 => Some(Key::Quit),
                b'\r' => Some(Key::Enter),
                b'0'..=b'9' => Some(Key::Digit(byte as char)),
                _ => Some(Key::Other(byte as char)),
            },
            DecodeState::SawEsc => {
                if byte == b'[' {
                    self.state = DecodeState::SawEscBracket;
                    None
                } else {
                    // Broken sequence: the escape byte is dropped and this
                    // byte is decoded on its own.
                    self.state = DecodeState::Idle;
                    self.feed(byte)
                }
            }
            DecodeState::SawEscBracket => {
                self.state = DecodeState::Idle;
                match byte {
                    b'C' => Some(Key::Right),
                    b'D' => Some(Key::Left),
                    _ => self.feed(byte),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(bytes: &[u8]) -> Vec<Key> {
        let mut decoder = KeyDecoder::new();
        bytes.iter().filter_map(|&b| decoder.feed(b)).collect()
    }

    #[test]
    fn test_digits_decode_directly() {
        assert_eq!(
            feed_all(b"42"),
            vec![Key::Digit('4'), Key::Digit('2')]
        );
    }

    #[test]
    fn test_enter_is_carriage_return() {
        assert_eq!(feed_all(&[13]), vec![Key::Enter]);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(feed_all(b"q"), vec![Key::Quit]);
        assert_eq!(feed_all(&[0x03]), vec![Key::Quit]);
    }

    #[test]
    fn test_right_arrow_sequence() {
        assert_eq!(feed_all(&[0x1b, b'[', b'C']), vec![Key::Right]);
    }

    #[test]
    fn test_left_arrow_sequence() {
        assert_eq!(feed_all(&[0x1b, b'[', b'D']), vec![Key::Left]);
    }

    #[test]
    fn test_escape_prefix_yields_nothing_until_complete() {
        let mut decoder = KeyDecoder::new();
        assert_eq!(decoder.feed(0x1b), None);
        assert_eq!(decoder.feed(b'['), None);
        assert_eq!(decoder.feed(b'C'), Some(Key::Right));
    }

    #[test]
    fn test_broken_escape_falls_back_to_literal() {
        // ESC followed by a non-bracket byte: the byte decodes on its own.
        assert_eq!(feed_all(&[0x1b, b'x']), vec![Key::Other('x')]);
        assert_eq!(feed_all(&[0x1b, b'5']), vec![Key::Digit('5')]);
        assert_eq!(feed_all(&[0x1b, b'q']), vec![Key::Quit]);
    }

    #[test]
    fn test_unknown_csi_final_byte_falls_back_to_literal() {
        // ESC [ A (up arrow) is not a navigation key; 'A' decodes literally.
        assert_eq!(feed_all(&[0x1b, b'[', b'A']), vec![Key::Other('A')]);
    }

    #[test]
    fn test_digits_between_arrow_sequences_stay_separate() {
        // The fragility the legacy viewer had: digit bytes and escape bytes
        // sharing one buffer. Here they cannot mix.
        let keys = feed_all(&[b'1', 0x1b, b'[', b'C', b'2']);
        assert_eq!(keys, vec![Key::Digit('1'), Key::Right, Key::Digit('2')]);
    }

    #[test]
    fn test_double_escape_then_arrow() {
        // First ESC is dropped when the second arrives; the rest completes.
        assert_eq!(feed_all(&[0x1b, 0x1b, b'[', b'D']), vec![Key::Left]);
    }

    #[test]
    fn test_bare_bracket_is_literal() {
        assert_eq!(feed_all(b"["), vec![Key::Other('[')]);
    }

    #[test]
    fn test_sequence_of_arrows() {
        let keys = feed_all(&[0x1b, b'[', b'C', 0x1b, b'[', b'C', 0x1b, b'[', b'D']);
        assert_eq!(keys, vec![Key::Right, Key::Right, Key::Left]);
    }
}
