//! Pull-based token pipeline primitives.
//!
//! A pipeline is a chain of [`TokenStream`]s: a tokenizer at the head, then
//! any number of filter stages. Each stage owns the stage before it and
//! exposes the same trait, so stages compose without knowing what feeds them.

use std::io;

use crate::token::Token;

#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid UTF-8 on input line {line}")]
    InvalidUtf8 { line: usize },
}

pub trait TokenStream {
    /// Move to the next token. `Ok(false)` means the stream is exhausted.
    fn advance(&mut self) -> Result<bool, StreamError>;

    /// The current token. Only meaningful after `advance` returned `Ok(true)`.
    fn token(&self) -> &Token;

    fn token_mut(&mut self) -> &mut Token;

    fn next(&mut self) -> Result<Option<&Token>, StreamError> {
        if self.advance()? {
            Ok(Some(self.token()))
        } else {
            Ok(None)
        }
    }

    /// Drain the stream, handing every token to `sink`. Returns the number of
    /// tokens seen.
    fn process(&mut self, sink: &mut dyn FnMut(&Token)) -> Result<usize, StreamError> {
        let mut count = 0;
        while self.advance()? {
            sink(self.token());
            count += 1;
        }
        Ok(count)
    }
}

/// Type-erased stream, used to chain filters chosen at runtime.
pub struct BoxTokenStream<'a>(Box<dyn TokenStream + 'a>);

impl<'a> BoxTokenStream<'a> {
    pub fn new<T: TokenStream + 'a>(stream: T) -> Self {
        BoxTokenStream(Box::new(stream))
    }
}

impl TokenStream for BoxTokenStream<'_> {
    fn advance(&mut self) -> Result<bool, StreamError> {
        self.0.advance()
    }

    fn token(&self) -> &Token {
        self.0.token()
    }

    fn token_mut(&mut self) -> &mut Token {
        self.0.token_mut()
    }
}

/// Factory for one pipeline stage.
///
/// Filters are stateless and shareable; per-stream state lives in the stream
/// returned by [`TokenFilter::transform`].
pub trait TokenFilter: Send + Sync {
    fn name(&self) -> &'static str;

    fn transform<'a>(&self, stream: BoxTokenStream<'a>) -> BoxTokenStream<'a>;
}
