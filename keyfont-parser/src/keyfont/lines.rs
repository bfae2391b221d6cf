//! Line splitting
//!
//!     Glyph tables come out of tools on every platform, so a line may end in `\n`, `\r\n` or a
//!     lone `\r`. `TextLines` accepts all three; the terminator is not part of the yielded line.
//!     A final line without a terminator is still a line.

use std::io::{self, BufRead};

/// Iterator over the lines of a buffered reader with universal line endings.
pub struct TextLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> TextLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Fill `self.buf` with the next line. Returns `false` once the input is exhausted.
    ///
    /// A `\r` that ends a chunk is kept at the end of the buffer until the next chunk shows
    /// whether a `\n` follows it.
    fn read_line(&mut self) -> io::Result<bool> {
        self.buf.clear();
        loop {
            let available = self.reader.fill_buf()?;
            let pending_cr = self.buf.last() == Some(&b'\r');

            if available.is_empty() {
                if pending_cr {
                    self.buf.pop();
                    return Ok(true);
                }
                return Ok(!self.buf.is_empty());
            }

            if pending_cr {
                let crlf = available[0] == b'\n';
                self.buf.pop();
                if crlf {
                    self.reader.consume(1);
                }
                return Ok(true);
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) if available[pos] == b'\n' => {
                    self.buf.extend_from_slice(&available[..pos]);
                    self.reader.consume(pos + 1);
                    return Ok(true);
                }
                Some(pos) => match available.get(pos + 1) {
                    Some(&next) => {
                        self.buf.extend_from_slice(&available[..pos]);
                        let used = if next == b'\n' { pos + 2 } else { pos + 1 };
                        self.reader.consume(used);
                        return Ok(true);
                    }
                    None => {
                        self.buf.extend_from_slice(&available[..=pos]);
                        self.reader.consume(pos + 1);
                    }
                },
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for TextLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_line() {
            Ok(false) => None,
            Ok(true) => Some(
                String::from_utf8(std::mem::take(&mut self.buf))
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            ),
            Err(e) => Some(Err(e)),
        }
    }
}
