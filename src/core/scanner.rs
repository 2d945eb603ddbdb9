use crate::utils::error::{CheckError, Result};
use std::fmt::Display;
use std::io::BufRead;
use std::str::FromStr;

/// Whitespace-separated token reader over a buffered source.
///
/// Input is consumed one line at a time; blank lines are skipped and a line
/// may hold any number of tokens.
pub struct Scanner<R> {
    reader: R,
    // Tokens of the current line, stored in reverse so `pop` yields them in order.
    pending: Vec<String>,
    line: usize,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
            line: 0,
        }
    }

    /// 1-based number of the last line read, 0 before any input.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Next raw token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        while self.pending.is_empty() {
            buf.clear();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let text = std::str::from_utf8(&buf).map_err(|_| self.encoding_error(&buf))?;
            self.pending = text.split_whitespace().rev().map(str::to_owned).collect();
        }
        Ok(self.pending.pop())
    }

    // Undecodable bytes are malformed input; report the first token they occur in.
    fn encoding_error(&self, buf: &[u8]) -> CheckError {
        let token = buf
            .split(|b| b.is_ascii_whitespace())
            .find(|t| std::str::from_utf8(t).is_err())
            .unwrap_or(buf);

        CheckError::InvalidEncoding {
            token: String::from_utf8_lossy(token).into_owned(),
            line: self.line,
        }
    }

    /// Reads and parses the next token. `what` names the value for error messages.
    pub fn next<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let token = self.next_token()?.ok_or_else(|| CheckError::UnexpectedEof {
            expected: what.to_string(),
            line: self.line,
        })?;

        token.parse::<T>().map_err(|e| CheckError::InvalidToken {
            expected: what.to_string(),
            reason: e.to_string(),
            token,
            line: self.line,
        })
    }
}
