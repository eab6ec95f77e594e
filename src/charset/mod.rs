pub mod buffer;

use std::fmt::Debug;

use serde::Serialize;

use crate::error::CodecError;

pub use buffer::{ByteCursor, TextBuffer};

/// A byte sequence the decoder has no mapping for. `position` is the
/// offset of its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnmappableSequence {
    pub bytes: [u8; 2],
    pub position: usize,
}

impl UnmappableSequence {
    pub fn length(&self) -> usize {
        self.bytes.len()
    }
}

/// Outcome of one `decode_loop` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoderResult {
    /// Input exhausted, or only a partial pair remains. Feed more bytes.
    Underflow,
    /// The output buffer cannot take the next glyph. Drain it and retry.
    Overflow,
    Unmappable(UnmappableSequence),
}

pub trait Decoder: Send + Sync + Debug {
    /// Decode as much of `input` into `out` as possible. On return the
    /// cursor sits on the first byte that produced no output.
    fn decode_loop(&self, input: &mut ByteCursor<'_>, out: &mut TextBuffer) -> CoderResult;
}

pub trait Encoder: Send + Sync + Debug {
    fn encode(&self, text: &str, out: &mut Vec<u8>) -> Result<(), CodecError>;
}

/// Encoder for charsets that only decode. Every call fails.
#[derive(Debug, Clone, Copy)]
pub struct UnsupportedEncoder {
    charset: &'static str,
}

impl UnsupportedEncoder {
    pub fn new(charset: &'static str) -> Self {
        Self { charset }
    }
}

impl Encoder for UnsupportedEncoder {
    fn encode(&self, _text: &str, _out: &mut Vec<u8>) -> Result<(), CodecError> {
        Err(CodecError::EncodingUnsupported { charset: self.charset })
    }
}

pub trait Charset: Send + Sync + Debug {
    fn name(&self) -> &'static str;

    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    fn new_decoder(&self) -> Box<dyn Decoder>;

    fn new_encoder(&self) -> Box<dyn Encoder>;

    fn can_encode(&self) -> bool {
        false
    }

    /// A charset only contains itself.
    fn contains(&self, other: &dyn Charset) -> bool {
        self.name() == other.name()
    }
}
