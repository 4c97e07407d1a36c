//! Property-based tests for the katakana uppercase filter.
//!
//! Inputs mix small kana, full-size kana, the ㇷ゚ sequence, stray combining
//! marks, ASCII and whitespace so every branch of the rewrite gets hit.

use proptest::prelude::*;

use crate::filter::{needs_uppercase, uppercase_katakana};
use crate::stream::TokenStream;
use crate::token::Token;
use crate::tokenizer::{VecTokenStream, WhitespaceTokenizer};
use crate::unicode::{is_small_katakana, COMBINING_HANDAKUTEN, SMALL_KATAKANA};
use crate::{KatakanaUppercaseFilter, TextAnalyzer};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_piece() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(SMALL_KATAKANA.to_vec())
            .prop_map(|(small, _)| small.to_string()),
        3 => prop::sample::select(SMALL_KATAKANA.to_vec())
            .prop_map(|(_, full)| full.to_string()),
        2 => Just("ㇷ\u{309A}".to_string()),
        1 => Just(COMBINING_HANDAKUTEN.to_string()),
        2 => prop::sample::select(vec!["あ", "ぁ", "漢", "ｯ", "ー", "a", "7"])
            .prop_map(str::to_string),
        1 => prop::sample::select(vec![" ", "\u{3000}", "\n"]).prop_map(str::to_string),
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_piece(), 0..24).prop_map(|pieces| pieces.concat())
}

fn arb_plain_text() -> impl Strategy<Value = String> {
    any::<String>().prop_filter("no small katakana", |s| !s.chars().any(is_small_katakana))
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn idempotent(text in arb_text()) {
        let once = uppercase_katakana(&text).into_owned();
        let twice = uppercase_katakana(&once).into_owned();
        prop_assert_eq!(&once, &twice);
        prop_assert!(!needs_uppercase(&once));
    }

    #[test]
    fn identity_without_small_kana(text in arb_plain_text()) {
        let out = uppercase_katakana(&text);
        prop_assert_eq!(&*out, text.as_str());
    }

    #[test]
    fn no_small_kana_survive(text in arb_text()) {
        let out = uppercase_katakana(&text);
        prop_assert!(!out.chars().any(is_small_katakana));
    }

    #[test]
    fn char_count_shrinks_by_pu_sequences(text in arb_text()) {
        let pairs = text.matches("ㇷ\u{309A}").count();
        let out = uppercase_katakana(&text);
        prop_assert_eq!(out.chars().count(), text.chars().count() - pairs);
    }

    #[test]
    fn filter_neither_drops_nor_fabricates(texts in prop::collection::vec(arb_text(), 0..12)) {
        let tokens: Vec<Token> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Token::new(t.clone(), i * 100, i * 100 + t.len(), i))
            .collect();
        let mut stream = KatakanaUppercaseFilter::wrap(VecTokenStream::new(tokens.clone()));
        let mut out = Vec::new();
        while stream.advance().unwrap() {
            out.push(stream.token().clone());
        }
        prop_assert!(!stream.advance().unwrap());
        prop_assert_eq!(out.len(), tokens.len());
        for (before, after) in tokens.iter().zip(&out) {
            let expected = uppercase_katakana(&before.text);
            prop_assert_eq!(after.text.as_str(), &*expected);
            prop_assert_eq!(after.offset_from, before.offset_from);
            prop_assert_eq!(after.offset_to, before.offset_to);
            prop_assert_eq!(after.position, before.position);
        }
    }

    #[test]
    fn analyzer_matches_whole_string_normalization(text in arb_text()) {
        let analyzer = TextAnalyzer::new(WhitespaceTokenizer::default())
            .with_filter(KatakanaUppercaseFilter);
        let joined: Vec<String> = analyzer
            .analyze(&text)
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect();
        let expected: Vec<String> = uppercase_katakana(&text)
            .split_whitespace()
            .map(str::to_string)
            .collect();
        prop_assert_eq!(joined, expected);
    }
}
