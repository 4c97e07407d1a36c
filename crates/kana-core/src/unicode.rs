//! Character-level tables for Japanese small kana (捨て仮名).

/// Combining katakana-hiragana semi-voiced sound mark (handakuten).
pub const COMBINING_HANDAKUTEN: char = '\u{309A}';

/// Small ㇷ (U+31F7). Followed by [`COMBINING_HANDAKUTEN`] it renders as ㇷ゚,
/// which has no precomposed codepoint.
pub const SMALL_FU: char = 'ㇷ';

/// Full-size replacement for the ㇷ゚ sequence.
pub const FULL_PU: char = 'プ';

/// Every small katakana and its full-size counterpart, in codepoint order.
pub const SMALL_KATAKANA: [(char, char); 28] = [
    ('ァ', 'ア'),
    ('ィ', 'イ'),
    ('ゥ', 'ウ'),
    ('ェ', 'エ'),
    ('ォ', 'オ'),
    ('ッ', 'ツ'),
    ('ャ', 'ヤ'),
    ('ュ', 'ユ'),
    ('ョ', 'ヨ'),
    ('ヮ', 'ワ'),
    ('ヵ', 'カ'),
    ('ヶ', 'ケ'),
    ('ㇰ', 'ク'),
    ('ㇱ', 'シ'),
    ('ㇲ', 'ス'),
    ('ㇳ', 'ト'),
    ('ㇴ', 'ヌ'),
    ('ㇵ', 'ハ'),
    ('ㇶ', 'ヒ'),
    ('ㇷ', 'フ'),
    ('ㇸ', 'ヘ'),
    ('ㇹ', 'ホ'),
    ('ㇺ', 'ム'),
    ('ㇻ', 'ラ'),
    ('ㇼ', 'リ'),
    ('ㇽ', 'ル'),
    ('ㇾ', 'レ'),
    ('ㇿ', 'ロ'),
];

/// Full-size katakana for a small katakana, `None` for anything else.
pub fn to_full_size(c: char) -> Option<char> {
    let full = match c {
        'ァ' => 'ア',
        'ィ' => 'イ',
        'ゥ' => 'ウ',
        'ェ' => 'エ',
        'ォ' => 'オ',
        'ッ' => 'ツ',
        'ャ' => 'ヤ',
        'ュ' => 'ユ',
        'ョ' => 'ヨ',
        'ヮ' => 'ワ',
        'ヵ' => 'カ',
        'ヶ' => 'ケ',
        // Katakana Phonetic Extensions (U+31F0..U+31FF)
        'ㇰ' => 'ク',
        'ㇱ' => 'シ',
        'ㇲ' => 'ス',
        'ㇳ' => 'ト',
        'ㇴ' => 'ヌ',
        'ㇵ' => 'ハ',
        'ㇶ' => 'ヒ',
        'ㇷ' => 'フ',
        'ㇸ' => 'ヘ',
        'ㇹ' => 'ホ',
        'ㇺ' => 'ム',
        'ㇻ' => 'ラ',
        'ㇼ' => 'リ',
        'ㇽ' => 'ル',
        'ㇾ' => 'レ',
        'ㇿ' => 'ロ',
        _ => return None,
    };
    Some(full)
}

pub fn is_small_katakana(c: char) -> bool {
    to_full_size(c).is_some()
}

/// Check the full Katakana block (U+30A0..U+30FF) and the phonetic
/// extensions (U+31F0..U+31FF).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c) || ('\u{31F0}'..='\u{31FF}').contains(&c)
}
