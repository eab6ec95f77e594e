use crate::charset::{ByteCursor, CoderResult, Decoder, TextBuffer, UnmappableSequence};

use super::lookup::{resolve, BytePair, Lookup};

/// Decoder for the "mix" encoding. Holds no state between calls; the
/// cursor belongs to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct MixDecoder;

/// Where the decode loop is. `start` is always the offset of the pair's
/// class byte, which is where the cursor goes back to on any stop that
/// leaves the pair unconsumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ReadClassByte,
    ReadCharByte { class: u8, start: usize },
    Emit { text: &'static str, start: usize },
    NeedInput,
    NeedOutputSpace { start: usize },
    Unmappable { pair: BytePair, start: usize },
}

impl MixDecoder {
    fn step(input: &mut ByteCursor<'_>, out: &mut TextBuffer, state: State) -> State {
        match state {
            State::ReadClassByte => {
                let start = input.position();
                match input.get() {
                    Some(class) => State::ReadCharByte { class, start },
                    None => State::NeedInput,
                }
            }
            State::ReadCharByte { class, start } => match input.get() {
                Some(character) => {
                    let pair = BytePair::new(class, character);
                    match resolve(pair) {
                        Lookup::Found(text) => State::Emit { text, start },
                        Lookup::NotFound => State::Unmappable { pair, start },
                    }
                }
                // A lone zero at the end of the input is NUL on its own.
                // Host tools frame this charset as single-byte and rely on it
                // to terminate strings.
                None if class == 0 => State::Emit { text: "\0", start },
                None => {
                    input.rewind(1);
                    State::NeedInput
                }
            },
            State::Emit { text, start } => {
                if out.push_str(text) {
                    State::ReadClassByte
                } else {
                    State::NeedOutputSpace { start }
                }
            }
            terminal => terminal,
        }
    }
}

impl Decoder for MixDecoder {
    fn decode_loop(&self, input: &mut ByteCursor<'_>, out: &mut TextBuffer) -> CoderResult {
        let mut state = State::ReadClassByte;
        loop {
            state = match Self::step(input, out, state) {
                State::NeedInput => return CoderResult::Underflow,
                State::NeedOutputSpace { start } => {
                    input.set_position(start);
                    return CoderResult::Overflow;
                }
                State::Unmappable { pair, start } => {
                    input.set_position(start);
                    return CoderResult::Unmappable(UnmappableSequence {
                        bytes: [pair.class, pair.character],
                        position: start,
                    });
                }
                next => next,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_all(bytes: &[u8]) -> (String, CoderResult, usize) {
        let mut input = ByteCursor::new(bytes);
        let mut out = TextBuffer::with_capacity(64);
        let result = MixDecoder.decode_loop(&mut input, &mut out);
        (out.take(), result, input.position())
    }

    #[test]
    fn test_symbol_space_with_zero_class() {
        assert_eq!(decode_all(&[0x00, 0x6C]), (" ".to_string(), CoderResult::Underflow, 2));
    }

    #[test]
    fn test_hiragana_a() {
        assert_eq!(decode_all(&[0x04, 0x01]).0, "あ");
    }

    #[test]
    fn test_katakana_a() {
        assert_eq!(decode_all(&[0x04, 0x77]).0, "ア");
    }

    #[test]
    fn test_lone_trailing_zero_is_nul() {
        assert_eq!(decode_all(&[0x00]), ("\0".to_string(), CoderResult::Underflow, 1));
    }

    #[test]
    fn test_lone_trailing_nonzero_waits_for_more() {
        let (text, result, pos) = decode_all(&[0x04, 0x01, 0x04]);
        assert_eq!(text, "あ");
        assert_eq!(result, CoderResult::Underflow);
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_empty_input_underflows() {
        assert_eq!(decode_all(&[]), (String::new(), CoderResult::Underflow, 0));
    }

    #[test]
    fn test_unmappable_rewinds_to_pair_start() {
        let bytes = [0x04, 0x02, 0xAB, 0x01, 0x04, 0x03];
        let (text, result, pos) = decode_all(&bytes);
        assert_eq!(text, "い");
        assert_eq!(
            result,
            CoderResult::Unmappable(UnmappableSequence { bytes: [0xAB, 0x01], position: 2 })
        );
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_unmappable_is_deterministic_on_retry() {
        let bytes = [0xAB, 0x01];
        let mut input = ByteCursor::new(&bytes);
        let mut out = TextBuffer::with_capacity(64);
        let first = MixDecoder.decode_loop(&mut input, &mut out);
        let second = MixDecoder.decode_loop(&mut input, &mut out);
        assert!(matches!(first, CoderResult::Unmappable(_)));
        assert_eq!(first, second);
        assert_eq!(input.position(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_overflow_leaves_pair_unconsumed() {
        let bytes = [0x04, 0x01, 0x04, 0x02, 0x04, 0x03];
        let mut input = ByteCursor::new(&bytes);
        let mut out = TextBuffer::with_capacity(2);
        assert_eq!(MixDecoder.decode_loop(&mut input, &mut out), CoderResult::Overflow);
        assert_eq!(out.take(), "あい");
        assert_eq!(input.position(), 4);
        assert_eq!(MixDecoder.decode_loop(&mut input, &mut out), CoderResult::Underflow);
        assert_eq!(out.take(), "う");
    }

    #[test]
    fn test_overflow_on_multi_scalar_glyph() {
        let bytes = [0x00, 0xDB];
        let mut input = ByteCursor::new(&bytes);
        let mut out = TextBuffer::with_capacity(1);
        assert_eq!(MixDecoder.decode_loop(&mut input, &mut out), CoderResult::Overflow);
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_overflow_on_lone_nul_keeps_byte() {
        let mut input = ByteCursor::new(&[0x00]);
        let mut out = TextBuffer::with_capacity(0);
        assert_eq!(MixDecoder.decode_loop(&mut input, &mut out), CoderResult::Overflow);
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_mixed_sentence() {
        // "ハロー！" then newline
        let bytes = [0x04, 0x77 + 25, 0x04, 0x77 + 42, 0x00, 0x51, 0x00, 0x5C, 0x00, 0xFF];
        assert_eq!(decode_all(&bytes).0, "ハロー！\n");
    }

    #[test]
    fn test_chunking_is_transparent_at_pair_boundaries() {
        let bytes = [0x04, 0x01, 0x0C, 0x05, 0x00, 0x6C, 0x24, 0x21, 0x04, 0x80];
        let whole = decode_all(&bytes).0;
        for split in (0..=bytes.len()).step_by(2) {
            let (head, tail) = bytes.split_at(split);
            let joined = decode_all(head).0 + &decode_all(tail).0;
            assert_eq!(joined, whole, "split at {split}");
        }
    }
}
