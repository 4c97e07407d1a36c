//! Token producers that sit at the head of a pipeline.

use std::io::BufRead;
use std::vec;

use crate::stream::{StreamError, TokenStream};
use crate::token::Token;

/// Default cap on token length in chars. Longer runs are split.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 255;

/// Splits text on Unicode whitespace.
#[derive(Debug, Clone, Copy)]
pub struct WhitespaceTokenizer {
    max_token_len: usize,
}

impl Default for WhitespaceTokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TOKEN_LEN)
    }
}

impl WhitespaceTokenizer {
    pub fn new(max_token_len: usize) -> Self {
        Self {
            max_token_len: max_token_len.max(1),
        }
    }

    pub fn max_token_len(&self) -> usize {
        self.max_token_len
    }

    pub fn token_stream<'a>(&self, text: &'a str) -> WhitespaceTokenStream<'a> {
        WhitespaceTokenStream {
            text,
            cursor: 0,
            position: 0,
            max_token_len: self.max_token_len,
            token: Token::default(),
        }
    }

    pub fn reader_stream<R: BufRead>(&self, reader: R) -> ReaderTokenizer<R> {
        ReaderTokenizer::new(reader, self.max_token_len)
    }
}

/// Find the next whitespace-delimited run in `text` starting at `*cursor`,
/// cut at `max_len` chars. Advances the cursor past the run.
fn next_word(text: &str, cursor: &mut usize, max_len: usize) -> Option<(usize, usize)> {
    let rest = &text[*cursor..];
    let skip = rest
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)?;
    let start = *cursor + skip;
    let mut end = text.len();
    for (count, (i, c)) in text[start..].char_indices().enumerate() {
        if c.is_whitespace() || count == max_len {
            end = start + i;
            break;
        }
    }
    *cursor = end;
    Some((start, end))
}

pub struct WhitespaceTokenStream<'a> {
    text: &'a str,
    cursor: usize,
    position: usize,
    max_token_len: usize,
    token: Token,
}

impl TokenStream for WhitespaceTokenStream<'_> {
    fn advance(&mut self) -> Result<bool, StreamError> {
        match next_word(self.text, &mut self.cursor, self.max_token_len) {
            Some((start, end)) => {
                self.token
                    .assign(&self.text[start..end], start, end, self.position);
                self.position += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn token(&self) -> &Token {
        &self.token
    }

    fn token_mut(&mut self) -> &mut Token {
        &mut self.token
    }
}

/// Whitespace tokenizer over any buffered reader, one line at a time.
///
/// Offsets count bytes from the start of the reader. Read failures and
/// non-UTF-8 lines are reported from `advance`.
pub struct ReaderTokenizer<R> {
    reader: R,
    buf: Vec<u8>,
    line: String,
    line_no: usize,
    line_base: usize,
    consumed: usize,
    cursor: usize,
    position: usize,
    max_token_len: usize,
    done: bool,
    token: Token,
}

impl<R: BufRead> ReaderTokenizer<R> {
    pub fn new(reader: R, max_token_len: usize) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: String::new(),
            line_no: 0,
            line_base: 0,
            consumed: 0,
            cursor: 0,
            position: 0,
            max_token_len: max_token_len.max(1),
            done: false,
            token: Token::default(),
        }
    }

    /// Load the next line into `self.line`. Returns `Ok(false)` at EOF.
    fn fill_line(&mut self) -> Result<bool, StreamError> {
        self.buf.clear();
        let n = self.reader.read_until(b'\n', &mut self.buf)?;
        if n == 0 {
            return Ok(false);
        }
        self.line_no += 1;
        self.line_base = self.consumed;
        self.consumed += n;
        let text = std::str::from_utf8(&self.buf)
            .map_err(|_| StreamError::InvalidUtf8 { line: self.line_no })?;
        self.line.clear();
        self.line.push_str(text);
        self.cursor = 0;
        Ok(true)
    }
}

impl<R: BufRead> TokenStream for ReaderTokenizer<R> {
    fn advance(&mut self) -> Result<bool, StreamError> {
        loop {
            if let Some((start, end)) = next_word(&self.line, &mut self.cursor, self.max_token_len)
            {
                self.token.assign(
                    &self.line[start..end],
                    self.line_base + start,
                    self.line_base + end,
                    self.position,
                );
                self.position += 1;
                return Ok(true);
            }
            if self.done {
                return Ok(false);
            }
            if !self.fill_line()? {
                self.done = true;
                self.line.clear();
                self.cursor = 0;
            }
        }
    }

    fn token(&self) -> &Token {
        &self.token
    }

    fn token_mut(&mut self) -> &mut Token {
        &mut self.token
    }
}

/// Replays a fixed list of tokens.
pub struct VecTokenStream {
    tokens: vec::IntoIter<Token>,
    token: Token,
}

impl VecTokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            token: Token::default(),
        }
    }
}

impl TokenStream for VecTokenStream {
    fn advance(&mut self) -> Result<bool, StreamError> {
        match self.tokens.next() {
            Some(token) => {
                self.token = token;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn token(&self) -> &Token {
        &self.token
    }

    fn token_mut(&mut self) -> &mut Token {
        &mut self.token
    }
}
