//! Digit-sequence primitives shared by every validator and mask.

/// Keep only the decimal digits of a string, in their original order.
///
/// Total over any input; letters, punctuation, whitespace, and symbols are
/// discarded. Every validator and mask in the crate normalizes through here.
pub fn strip_non_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// True when the string is non-empty and consists of a single repeated
/// character. CPF/CNPJ sequences like "00000000000" pass the check-digit
/// arithmetic but are never issued, so validators reject them up front.
pub fn all_same_digit(digits: &str) -> bool {
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

/// Numeric values of a digit string. Non-digit characters are skipped, so
/// callers that require a fixed length must check it beforehand.
pub fn digit_values(digits: &str) -> Vec<u32> {
    digits.chars().filter_map(|c| c.to_digit(10)).collect()
}
