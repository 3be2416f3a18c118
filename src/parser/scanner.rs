//! Byte scanner that skips over SQL literals and comments
//!
//! Structural characters (parentheses, commas, line breaks, semicolons) are
//! all ASCII, so walking bytes is safe for UTF-8 input: no byte of a
//! multi-byte sequence can be mistaken for one of them.

/// Iterator over `(offset, byte)` pairs of SQL text that lie outside string
/// literals, quoted identifiers and comments.
///
/// The line break that ends a `--` comment is still yielded.
pub struct CodeBytes<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> CodeBytes<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    fn peek_next(&self) -> Option<u8> {
        self.bytes.get(self.pos + 1).copied()
    }

    /// Skip a single-quoted literal; `''` inside it is an escaped quote
    fn skip_string_literal(&mut self) {
        self.pos += 1;
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos] == b'\'' {
                if self.peek_next() == Some(b'\'') {
                    self.pos += 2;
                    continue;
                }
                self.pos += 1;
                return;
            }
            self.pos += 1;
        }
    }

    fn skip_quoted_identifier(&mut self, quote: u8) {
        self.pos += 1;
        while self.pos < self.bytes.len() && self.bytes[self.pos] != quote {
            self.pos += 1;
        }
        self.pos = (self.pos + 1).min(self.bytes.len());
    }

    fn skip_line_comment(&mut self) {
        while self.pos < self.bytes.len() && self.bytes[self.pos] != b'\n' {
            self.pos += 1;
        }
    }

    fn skip_block_comment(&mut self) {
        self.pos += 2;
        while self.pos + 1 < self.bytes.len()
            && !(self.bytes[self.pos] == b'*' && self.bytes[self.pos + 1] == b'/')
        {
            self.pos += 1;
        }
        self.pos = (self.pos + 2).min(self.bytes.len());
    }
}

impl Iterator for CodeBytes<'_> {
    type Item = (usize, u8);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            match b {
                b'\'' => self.skip_string_literal(),
                b'"' | b'`' => self.skip_quoted_identifier(b),
                b'-' if self.peek_next() == Some(b'-') => self.skip_line_comment(),
                b'/' if self.peek_next() == Some(b'*') => self.skip_block_comment(),
                _ => {
                    let offset = self.pos;
                    self.pos += 1;
                    return Some((offset, b));
                }
            }
        }
        None
    }
}
