//! Small katakana → full-size katakana normalization.
//!
//! Useful for matching old-style text (patents, legal documents, contracts)
//! where small kana were written full size: "ストップウォッチ" and
//! "ストツプウオツチ" normalize to the same term.

use std::borrow::Cow;
use std::mem;

use tracing::trace;

use crate::stream::{BoxTokenStream, StreamError, TokenFilter, TokenStream};
use crate::token::Token;
use crate::unicode::{to_full_size, COMBINING_HANDAKUTEN, FULL_PU, SMALL_FU};

/// Whether `text` contains anything [`uppercase_katakana`] would rewrite.
///
/// Every pattern starts with a mapped small katakana (ㇷ゚ starts with ㇷ),
/// so a per-char table check is enough.
pub fn needs_uppercase(text: &str) -> bool {
    !text.is_ascii() && text.chars().any(|c| to_full_size(c).is_some())
}

/// Append the normalized form of `text` to `out`.
///
/// The two-codepoint ㇷ゚ is matched before the per-char table. Looking ㇷ up
/// first would emit フ and strand the combining mark.
pub fn uppercase_katakana_into(text: &str, out: &mut String) {
    out.reserve(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == SMALL_FU && chars.peek() == Some(&COMBINING_HANDAKUTEN) {
            chars.next();
            out.push(FULL_PU);
            continue;
        }
        out.push(to_full_size(c).unwrap_or(c));
    }
}

/// Normalize a whole string. Borrows when nothing needs rewriting.
pub fn uppercase_katakana(text: &str) -> Cow<'_, str> {
    if !needs_uppercase(text) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    uppercase_katakana_into(text, &mut out);
    Cow::Owned(out)
}

/// Rewrites small katakana in every token to full-size katakana.
#[derive(Debug, Clone, Copy, Default)]
pub struct KatakanaUppercaseFilter;

impl KatakanaUppercaseFilter {
    pub const NAME: &'static str = "japaneseKatakanaUppercase";

    /// Wrap a concrete upstream without boxing it.
    pub fn wrap<S: TokenStream>(upstream: S) -> KatakanaUppercaseFilterStream<S> {
        KatakanaUppercaseFilterStream::new(upstream)
    }
}

impl TokenFilter for KatakanaUppercaseFilter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn transform<'a>(&self, stream: BoxTokenStream<'a>) -> BoxTokenStream<'a> {
        BoxTokenStream::new(KatakanaUppercaseFilterStream::new(stream))
    }
}

pub struct KatakanaUppercaseFilterStream<S> {
    tail: S,
    buffer: String,
    exhausted: bool,
}

impl<S: TokenStream> KatakanaUppercaseFilterStream<S> {
    pub fn new(tail: S) -> Self {
        Self {
            tail,
            buffer: String::new(),
            exhausted: false,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn into_inner(self) -> S {
        self.tail
    }
}

impl<S: TokenStream> TokenStream for KatakanaUppercaseFilterStream<S> {
    fn advance(&mut self) -> Result<bool, StreamError> {
        if self.exhausted {
            return Ok(false);
        }
        if !self.tail.advance()? {
            self.exhausted = true;
            return Ok(false);
        }
        let token = self.tail.token_mut();
        if needs_uppercase(&token.text) {
            self.buffer.clear();
            uppercase_katakana_into(&token.text, &mut self.buffer);
            trace!(
                from = %token.text,
                to = %self.buffer,
                position = token.position,
                "katakana uppercase"
            );
            mem::swap(&mut token.text, &mut self.buffer);
        }
        Ok(true)
    }

    fn token(&self) -> &Token {
        self.tail.token()
    }

    fn token_mut(&mut self) -> &mut Token {
        self.tail.token_mut()
    }
}
