//! Person-name normalization and validation.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Latin letters including the accented characters common in Portuguese names.
const NAME_PART_PATTERN: &str = r"^[A-Za-záàâãéèêíïóôõöúçñÁÀÂÃÉÈÊÍÏÓÔÕÖÚÇÑ]+$";

/// First and last name joined by spaces, hyphens, or apostrophes.
const NAME_AND_LAST_NAME_PATTERN: &str = r"^[a-zA-ZÀ-ÿ]+([-\s'][a-zA-ZÀ-ÿ]+)+$";

fn cached(cell: &'static OnceLock<Option<Regex>>, pattern: &str, value: &str) -> bool {
    cell.get_or_init(|| Regex::new(pattern).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

/// Capitalize the first letter of each word, lowercasing the rest, and
/// collapse runs of whitespace: `"  alice   SMITH "` becomes `"Alice Smith"`.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Cheap completeness check: non-empty, no trailing space, at least two words.
pub fn name_is_valid(name: &str) -> bool {
    if name.is_empty() || name.ends_with(' ') {
        return false;
    }
    name.trim().split(' ').count() >= 2
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    fn rejected(message: &str) -> Self {
        Self {
            valid: false,
            message: message.to_string(),
        }
    }
}

/// Full-name validation with a human-readable rejection message: requires
/// first and last name, single spacing, and alphabetic characters only.
pub fn fullname_is_valid(name: &str) -> ValidationResult {
    static DOUBLE_SPACE: OnceLock<Option<Regex>> = OnceLock::new();
    static NAME_PART: OnceLock<Option<Regex>> = OnceLock::new();

    let trimmed = name.trim();

    if cached(&DOUBLE_SPACE, r"\s{2,}", trimmed) {
        return ValidationResult::rejected("No extra spaces allowed");
    }

    let parts: Vec<&str> = trimmed.split(' ').collect();
    if parts.len() < 2 {
        return ValidationResult::rejected("Name should include first and last name");
    }

    for part in parts {
        if !cached(&NAME_PART, NAME_PART_PATTERN, part) {
            return ValidationResult::rejected("Only alphabetic characters are allowed");
        }
    }

    ValidationResult::ok()
}

/// Boolean variant of the full-name check that also admits hyphenated and
/// apostrophized names ("Mary-Jane Smith", "O'Connor").
pub fn valid_name_and_last_name(name: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    cached(&RE, NAME_AND_LAST_NAME_PATTERN, name)
}

/// First two whitespace-separated words of a name; a single word comes back
/// alone, an empty input comes back empty.
pub fn first_and_last_name(name: &str) -> String {
    let mut words = name.split_whitespace();
    match (words.next(), words.next()) {
        (Some(first), Some(last)) => format!("{} {}", first, last),
        (Some(first), None) => first.to_string(),
        _ => String::new(),
    }
}
