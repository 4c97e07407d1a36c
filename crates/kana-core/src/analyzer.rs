use std::io::BufRead;

use tracing::debug_span;

use crate::filter::{build_filter, AnalysisError};
use crate::settings::AnalyzerSettings;
use crate::stream::{BoxTokenStream, StreamError, TokenFilter, TokenStream};
use crate::token::Token;
use crate::tokenizer::WhitespaceTokenizer;

/// Tokenizer plus an ordered chain of filters.
pub struct TextAnalyzer {
    tokenizer: WhitespaceTokenizer,
    filters: Vec<Box<dyn TokenFilter>>,
}

impl TextAnalyzer {
    pub fn new(tokenizer: WhitespaceTokenizer) -> Self {
        Self {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Append a filter. Filters run in the order they were added.
    pub fn with_filter(mut self, filter: impl TokenFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn from_settings(settings: &AnalyzerSettings) -> Result<Self, AnalysisError> {
        let filters = settings
            .filters
            .iter()
            .map(build_filter)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            tokenizer: WhitespaceTokenizer::new(settings.max_token_len),
            filters,
        })
    }

    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub fn token_stream<'a>(&self, text: &'a str) -> BoxTokenStream<'a> {
        self.chain(BoxTokenStream::new(self.tokenizer.token_stream(text)))
    }

    pub fn reader_stream<'a, R: BufRead + 'a>(&self, reader: R) -> BoxTokenStream<'a> {
        self.chain(BoxTokenStream::new(self.tokenizer.reader_stream(reader)))
    }

    fn chain<'a>(&self, head: BoxTokenStream<'a>) -> BoxTokenStream<'a> {
        self.filters
            .iter()
            .fold(head, |stream, filter| filter.transform(stream))
    }

    pub fn analyze(&self, text: &str) -> Result<Vec<Token>, StreamError> {
        let _span =
            debug_span!("analyze", len = text.len(), filters = self.filters.len()).entered();
        collect(self.token_stream(text))
    }

    pub fn analyze_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Token>, StreamError> {
        let _span = debug_span!("analyze_reader", filters = self.filters.len()).entered();
        collect(self.reader_stream(reader))
    }
}

fn collect(mut stream: BoxTokenStream<'_>) -> Result<Vec<Token>, StreamError> {
    let mut tokens = Vec::new();
    stream.process(&mut |t: &Token| tokens.push(t.clone()))?;
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::filter::{FilterConfig, KatakanaUppercaseFilter};

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_no_filters_is_plain_tokenizer() {
        let analyzer = TextAnalyzer::new(WhitespaceTokenizer::default());
        let tokens = analyzer.analyze("ストップ ウォッチ").unwrap();
        assert_eq!(texts(&tokens), vec!["ストップ", "ウォッチ"]);
    }

    #[test]
    fn test_katakana_chain() {
        let analyzer =
            TextAnalyzer::new(WhitespaceTokenizer::default()).with_filter(KatakanaUppercaseFilter);
        let text = "ストップウォッチ を ㇷ゚ 2024";
        let tokens = analyzer.analyze(text).unwrap();
        assert_eq!(texts(&tokens), vec!["ストツプウオツチ", "を", "プ", "2024"]);
        // Offsets still point at the original surface.
        assert_eq!(&text[tokens[2].offset_from..tokens[2].offset_to], "ㇷ゚");
        assert_eq!(tokens[3].position, 3);
    }

    #[test]
    fn test_double_application_is_idempotent() {
        let analyzer = TextAnalyzer::new(WhitespaceTokenizer::default())
            .with_filter(KatakanaUppercaseFilter)
            .with_filter(KatakanaUppercaseFilter);
        let tokens = analyzer.analyze("ャュョ ヮ").unwrap();
        assert_eq!(texts(&tokens), vec!["ヤユヨ", "ワ"]);
        assert_eq!(analyzer.filter_names().len(), 2);
    }

    #[test]
    fn test_reader_input() {
        let analyzer =
            TextAnalyzer::new(WhitespaceTokenizer::default()).with_filter(KatakanaUppercaseFilter);
        let tokens = analyzer.analyze_reader(Cursor::new("ァ\nィ ゥ\n")).unwrap();
        assert_eq!(texts(&tokens), vec!["ア", "イ", "ウ"]);
    }

    #[test]
    fn test_reader_error_surfaces() {
        let analyzer =
            TextAnalyzer::new(WhitespaceTokenizer::default()).with_filter(KatakanaUppercaseFilter);
        let bytes: &[u8] = b"\xc3\x28";
        let err = analyzer.analyze_reader(bytes).unwrap_err();
        assert!(matches!(err, StreamError::InvalidUtf8 { line: 1 }));
    }

    #[test]
    fn test_from_settings() {
        let settings = AnalyzerSettings {
            max_token_len: 2,
            filters: vec![FilterConfig::named(KatakanaUppercaseFilter::NAME)],
        };
        let analyzer = TextAnalyzer::from_settings(&settings).unwrap();
        assert_eq!(analyzer.filter_names(), vec![KatakanaUppercaseFilter::NAME]);
        let tokens = analyzer.analyze("ッァッ").unwrap();
        assert_eq!(texts(&tokens), vec!["ツア", "ツ"]);
    }

    #[test]
    fn test_from_settings_unknown_filter() {
        let settings = AnalyzerSettings {
            max_token_len: 255,
            filters: vec![FilterConfig::named("stemmer")],
        };
        let err = TextAnalyzer::from_settings(&settings).err().unwrap();
        assert!(matches!(err, AnalysisError::UnknownFilter(name) if name == "stemmer"));
    }
}
