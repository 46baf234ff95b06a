//! Positional display masks for digit sequences.
//!
//! Formatting is best-effort and implies nothing about validity: separators
//! are inserted at fixed digit-count boundaries, short input gets only the
//! separators it reaches, and excess digits stay attached to the last group.
//! `clear_mask` is the exact inverse for any well-formed round trip.

use crate::utils::digits::strip_non_digits;

/// Format digits as a CPF (`xxx.xxx.xxx-xx`) or CNPJ (`xx.xxx.xxx/xxxx-xx`),
/// dispatching on digit count: 11 or fewer digits use the CPF pattern.
pub fn cpf_or_cnpj_mask(value: &str) -> String {
    let digits = strip_non_digits(value);
    if digits.len() <= 11 {
        cpf_mask(&digits)
    } else {
        cnpj_mask(&digits)
    }
}

fn cpf_mask(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + 3);
    for (i, ch) in digits.chars().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(ch);
    }
    out
}

fn cnpj_mask(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + 4);
    for (i, ch) in digits.chars().enumerate() {
        match i {
            2 | 5 => out.push('.'),
            8 => out.push('/'),
            12 => out.push('-'),
            _ => {}
        }
        out.push(ch);
    }
    out
}

/// Format digits as a Brazilian CEP: `xxxxx-xxx`. Fewer than six digits pass
/// through with only digit stripping applied.
pub fn brazilian_zipcode_mask(value: &str) -> String {
    let digits = strip_non_digits(value);
    let mut out = String::with_capacity(digits.len() + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i == 5 {
            out.push('-');
        }
        out.push(ch);
    }
    out
}

/// Format digits as a Brazilian telephone number: `(xx) xxxx-xxxx` for
/// 10-digit landlines, `(xx) xxxxx-xxxx` for 11-digit mobile numbers with the
/// leading `9`. Any other length passes through as bare digits.
pub fn brazilian_telephone_mask(value: &str) -> String {
    let digits = strip_non_digits(value);
    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        11 => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
        _ => digits,
    }
}

/// Walk a mask template left to right, consuming one input digit per `9`
/// placeholder and emitting literal characters verbatim. Stops as soon as the
/// input digits run out, so a long template yields a partial result rather
/// than an error.
pub fn apply_mask_template(template: &str, value: &str) -> String {
    let digits = strip_non_digits(value);
    let mut remaining = digits.chars().peekable();
    let mut out = String::with_capacity(template.len());

    for ch in template.chars() {
        if ch == '9' {
            match remaining.next() {
                Some(d) => out.push(d),
                None => break,
            }
        } else {
            if remaining.peek().is_none() {
                break;
            }
            out.push(ch);
        }
    }

    out
}

/// Strip every non-digit character from a formatted string. Inverse of the
/// mask formatters, exposed publicly for symmetry with them.
pub fn clear_mask(value: &str) -> String {
    strip_non_digits(value)
}
