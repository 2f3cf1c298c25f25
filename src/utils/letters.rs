use once_cell::sync::Lazy;

use crate::models::Locale;

/// Shortest word the builder will try to place
pub const MIN_WORD_LEN: usize = 2;

/// Filler alphabet for Latin locales
pub static LATIN_ALPHABET: Lazy<Vec<char>> = Lazy::new(|| ('A'..='Z').collect());

/// Common characters used to pad CJK puzzles. Not frequency weighted.
pub static COMMON_CHINESE_CHARS: Lazy<Vec<char>> = Lazy::new(|| {
    "的一是了我不人在他有这个上们来到大时地为子中你说生国年着就那和要下前"
        .chars()
        .collect()
});

/// Characters used to fill cells no word covers
pub fn filler_alphabet(locale: Locale) -> &'static [char] {
    match locale {
        Locale::Chinese => &COMMON_CHINESE_CHARS,
        Locale::Latin => &LATIN_ALPHABET,
    }
}

/// Basic CJK unified ideograph block (U+4E00..=U+9FA5)
pub fn is_cjk_ideograph(ch: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&ch)
}

fn is_allowed(ch: char, locale: Locale) -> bool {
    match locale {
        Locale::Latin => ch.is_ascii_uppercase(),
        Locale::Chinese => ch.is_ascii_uppercase() || is_cjk_ideograph(ch),
    }
}

/// Uppercase a raw word and strip everything outside the locale's charset.
///
/// Returns `None` when the cleaned word is shorter than [`MIN_WORD_LEN`]
/// or longer than `max_len` characters.
pub fn normalize_word(raw: &str, locale: Locale, max_len: usize) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .flat_map(char::to_uppercase)
        .filter(|ch| is_allowed(*ch, locale))
        .collect();

    let len = cleaned.chars().count();
    if (MIN_WORD_LEN..=max_len).contains(&len) {
        Some(cleaned)
    } else {
        None
    }
}
