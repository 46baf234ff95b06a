//! Generic string transforms with no Brazilian-format knowledge.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Strip diacritics by NFD-decomposing and dropping combining marks:
/// `"ação"` becomes `"acao"`.
pub fn remove_diacritics(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Replace non-breaking spaces with regular spaces and apply Unicode NFKC
/// normalization, folding compatibility characters to their canonical forms.
pub fn normalize_string(value: &str) -> String {
    value.replace('\u{a0}', " ").nfkc().collect()
}

/// Uppercase the first letter of each word, leaving the rest of the word
/// untouched: `"hello world"` becomes `"Hello World"` but `"McFLY"` stays
/// `"McFLY"` apart from its first letter.
pub fn capitalize_words(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        let is_word_char = ch.is_alphanumeric() || ch == '_';
        if at_word_start && is_word_char {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !is_word_char;
    }
    out
}

/// Truncate to `limit` characters. With `add_ellipsis`, the text is cut to
/// `limit - 3` and `...` appended so the total still fits the limit.
pub fn limit_string(text: &str, limit: usize, add_ellipsis: bool) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    if add_ellipsis {
        let truncated: String = text.chars().take(limit.saturating_sub(3)).collect();
        truncated + "..."
    } else {
        text.chars().take(limit).collect()
    }
}

/// Join items as a comma-separated list with each item double-quoted:
/// `["a", "b"]` becomes `"a", "b"`.
pub fn array_to_string_with_quotes<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("\"{}\"", item.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}
