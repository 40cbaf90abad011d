//! Line editor over a caller-supplied buffer

/// Backspace-aware edit cursor over a borrowed byte buffer.
///
/// The last buffer byte is reserved for the NUL terminator, so the data
/// capacity is `buf.len() - 1`. The cursor never advances past it;
/// rejected bytes are reported to the caller and otherwise ignored.
pub struct LineEditor<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> LineEditor<'a> {
    /// Start editing into `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// Data capacity (terminator byte excluded).
    pub fn capacity(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    /// Append a byte. Returns false if the buffer is full.
    pub fn push(&mut self, byte: u8) -> bool {
        if self.len < self.capacity() {
            self.buf[self.len] = byte;
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Remove the last byte. Returns false if there is nothing to erase.
    pub fn backspace(&mut self) -> bool {
        if self.len > 0 {
            self.len -= 1;
            true
        } else {
            false
        }
    }

    /// Stored length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stored bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Write the NUL terminator at the cursor and return the stored
    /// length. A zero-length buffer has no room for the terminator and
    /// is left untouched.
    pub fn finish(self) -> usize {
        if !self.buf.is_empty() {
            self.buf[self.len] = 0;
        }
        self.len
    }
}
