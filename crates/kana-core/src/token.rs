use serde::Serialize;

/// Lexical category attached by the tokenizer. Filters never change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    #[default]
    Word,
    Numeric,
}

/// A single token flowing through a pipeline.
///
/// Offsets are byte offsets into the source text and always describe the
/// original surface, even after a filter rewrites `text`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Token {
    pub text: String,
    pub offset_from: usize,
    pub offset_to: usize,
    /// Ordinal of the token within its stream, starting at 0.
    pub position: usize,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(
        text: impl Into<String>,
        offset_from: usize,
        offset_to: usize,
        position: usize,
    ) -> Self {
        let text = text.into();
        let kind = kind_of(&text);
        Self {
            text,
            offset_from,
            offset_to,
            position,
            kind,
        }
    }

    /// Overwrite every field in place, reusing the text allocation.
    pub(crate) fn assign(
        &mut self,
        text: &str,
        offset_from: usize,
        offset_to: usize,
        position: usize,
    ) {
        self.text.clear();
        self.text.push_str(text);
        self.offset_from = offset_from;
        self.offset_to = offset_to;
        self.position = position;
        self.kind = kind_of(text);
    }
}

fn kind_of(text: &str) -> TokenKind {
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        TokenKind::Numeric
    } else {
        TokenKind::Word
    }
}
