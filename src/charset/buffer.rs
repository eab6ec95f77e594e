/// Read cursor over a borrowed byte slice. Decoders advance it as they
/// consume input and rewind it when a pair cannot be finished.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn get(&mut self) -> Option<u8> {
        let byte = *self.bytes.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    /// Step back `n` bytes. Saturates at the start of the slice.
    pub fn rewind(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
    }

    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.bytes.len());
    }

    /// Bytes not yet consumed.
    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

/// Output buffer whose capacity is counted in Unicode scalar values.
/// Writes are all-or-nothing so a decoder never half-emits a glyph.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    text: String,
    chars: usize,
    capacity: usize,
}

impl TextBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { text: String::new(), chars: 0, capacity }
    }

    /// Append `s` if it fits. Returns `false` and leaves the buffer
    /// untouched otherwise.
    pub fn push_str(&mut self, s: &str) -> bool {
        let needed = s.chars().count();
        if needed > self.remaining() {
            return false;
        }
        self.text.push_str(s);
        self.chars += needed;
        true
    }

    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.chars)
    }

    pub fn is_empty(&self) -> bool {
        self.chars == 0
    }

    /// Drain everything written so far, freeing the full capacity again.
    pub fn take(&mut self) -> String {
        self.chars = 0;
        std::mem::take(&mut self.text)
    }
}
