//! Token pipeline that folds Japanese small katakana (ァ, ッ, ㇷ゚, ...) into
//! their full-size forms.

pub mod analyzer;
pub mod filter;
pub mod settings;
pub mod stream;
pub mod token;
pub mod tokenizer;
pub mod unicode;

pub use analyzer::TextAnalyzer;
pub use filter::{KatakanaUppercaseFilter, KatakanaUppercaseFilterStream};
pub use stream::{BoxTokenStream, StreamError, TokenFilter, TokenStream};
pub use token::{Token, TokenKind};

#[cfg(test)]
mod proptests;
