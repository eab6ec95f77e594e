use std::io::{ErrorKind, Read};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::charset::{ByteCursor, Charset, CoderResult, Decoder, TextBuffer, UnmappableSequence};
use crate::error::{AppError, CodecError};
use crate::tamagotchi::charmap::MAX_GLYPH_CHARS;

pub const DEFAULT_REPLACEMENT: &str = "\u{FFFD}";
pub const DEFAULT_OUTPUT_CAPACITY: usize = 256;

/// What to do with input the decoder cannot map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorAction {
    #[default]
    Report,
    Replace,
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    pub on_unmappable: ErrorAction,
    pub on_truncated: ErrorAction,
    pub replacement: String,
    pub output_capacity: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            on_unmappable: ErrorAction::Report,
            on_truncated: ErrorAction::Report,
            replacement: DEFAULT_REPLACEMENT.to_string(),
            output_capacity: DEFAULT_OUTPUT_CAPACITY,
        }
    }
}

/// Final result of a stream: the text plus every pair that was replaced
/// or skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub text: String,
    pub unmappable: Vec<UnmappableSequence>,
}

/// Drives a [`Decoder`] over input that arrives in chunks.
///
/// Bytes the decoder could not finish with (a dangling class byte, or a
/// reported unmappable pair) stay pending until the next `feed`. After a
/// reported pair the caller picks what happens next: feed again to get the
/// same error, [`skip_unmappable`](Self::skip_unmappable), or
/// [`replace_unmappable`](Self::replace_unmappable).
#[derive(Debug)]
pub struct StreamDecoder {
    decoder: Box<dyn Decoder>,
    options: DecodeOptions,
    pending: Vec<u8>,
    /// Stream offset of `pending[0]`.
    offset: usize,
    /// Set while the front of `pending` is a pair returned as an error.
    reported: Option<UnmappableSequence>,
    out: TextBuffer,
    text: String,
    unmappable: Vec<UnmappableSequence>,
}

impl StreamDecoder {
    pub fn new(charset: &dyn Charset, options: DecodeOptions) -> Self {
        let capacity = options.output_capacity.max(MAX_GLYPH_CHARS);
        Self {
            decoder: charset.new_decoder(),
            options,
            pending: Vec::new(),
            offset: 0,
            reported: None,
            out: TextBuffer::with_capacity(capacity),
            text: String::new(),
            unmappable: Vec::new(),
        }
    }

    /// Offset of the next byte that has not been decoded.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Decode as much of the stream as `chunk` completes.
    ///
    /// An unpaired trailing byte is held back even when it is zero: the
    /// lone-NUL rule only applies at the real end of the stream, in
    /// [`finish`](Self::finish).
    pub fn feed(&mut self, chunk: &[u8]) -> Result<(), CodecError> {
        trace!(len = chunk.len(), offset = self.offset, "feeding chunk");
        self.pending.extend_from_slice(chunk);
        let paired = self.pending.len() - self.pending.len() % 2;
        self.drain_pending(paired)
    }

    /// Drop the pair from the last `Unmappable` error and record it.
    /// Returns `None` when nothing is waiting to be skipped.
    pub fn skip_unmappable(&mut self) -> Option<UnmappableSequence> {
        self.resync(false)
    }

    /// Like [`skip_unmappable`](Self::skip_unmappable), but also emits the
    /// configured replacement text.
    pub fn replace_unmappable(&mut self) -> Option<UnmappableSequence> {
        self.resync(true)
    }

    fn resync(&mut self, replace: bool) -> Option<UnmappableSequence> {
        let seq = self.reported.take()?;
        self.pending.drain(..seq.length());
        self.offset += seq.length();
        self.record(seq, replace);
        Some(seq)
    }

    fn record(&mut self, seq: UnmappableSequence, replace: bool) {
        if replace {
            debug!(bytes = ?seq.bytes, position = seq.position, "replacing unmappable pair");
            self.text.push_str(&self.options.replacement);
        } else {
            debug!(bytes = ?seq.bytes, position = seq.position, "skipping unmappable pair");
        }
        self.unmappable.push(seq);
    }

    fn drain_pending(&mut self, end: usize) -> Result<(), CodecError> {
        self.reported = None;
        let pending = std::mem::take(&mut self.pending);
        let mut input = ByteCursor::new(&pending[..end]);
        let result = self.run(&mut input);
        self.offset += input.position();
        let mut rest = input.rest().to_vec();
        rest.extend_from_slice(&pending[end..]);
        self.pending = rest;
        result
    }

    fn run(&mut self, input: &mut ByteCursor<'_>) -> Result<(), CodecError> {
        loop {
            let result = self.decoder.decode_loop(input, &mut self.out);
            if !self.out.is_empty() {
                self.text.push_str(&self.out.take());
            }
            match result {
                CoderResult::Underflow => return Ok(()),
                CoderResult::Overflow => continue,
                CoderResult::Unmappable(seq) => {
                    let seq = UnmappableSequence { position: self.offset + seq.position, ..seq };
                    match self.options.on_unmappable {
                        ErrorAction::Report => {
                            self.reported = Some(seq);
                            return Err(CodecError::Unmappable {
                                bytes: seq.bytes,
                                position: seq.position,
                            });
                        }
                        ErrorAction::Replace => self.record(seq, true),
                        ErrorAction::Ignore => self.record(seq, false),
                    }
                    input.set_position(input.position() + seq.length());
                }
            }
        }
    }

    /// Drain the text decoded so far.
    pub fn take_text(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    /// End of stream. A single dangling byte is handled per `on_truncated`.
    pub fn finish(mut self) -> Result<Decoded, CodecError> {
        self.drain_pending(self.pending.len())?;
        if let Some(&byte) = self.pending.first() {
            let position = self.offset;
            match self.options.on_truncated {
                ErrorAction::Report => return Err(CodecError::Truncated { byte, position }),
                ErrorAction::Replace => {
                    warn!(byte, position, "replacing truncated trailing byte");
                    self.text.push_str(&self.options.replacement);
                }
                ErrorAction::Ignore => warn!(byte, position, "dropping truncated trailing byte"),
            }
        }
        Ok(Decoded { text: self.text, unmappable: self.unmappable })
    }
}

/// Decode a complete buffer in one go.
pub fn decode(
    charset: &dyn Charset,
    bytes: &[u8],
    options: &DecodeOptions,
) -> Result<Decoded, CodecError> {
    let mut stream = StreamDecoder::new(charset, options.clone());
    stream.feed(bytes)?;
    stream.finish()
}

/// Decode everything `reader` yields, `chunk_size` bytes at a time.
pub fn decode_reader<R: Read>(
    charset: &dyn Charset,
    mut reader: R,
    chunk_size: usize,
    options: &DecodeOptions,
) -> Result<Decoded, AppError> {
    let mut stream = StreamDecoder::new(charset, options.clone());
    let mut buf = vec![0u8; chunk_size.max(1)];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        stream.feed(&buf[..n])?;
    }
    Ok(stream.finish()?)
}
