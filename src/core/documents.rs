//! CPF and CNPJ check-digit validation.
//!
//! Both documents end in two check digits computed from the preceding base
//! (9 digits for CPF, 12 for CNPJ) with a weighted sum modulo 11. The two
//! schemes differ in how weights are assigned: CPF decrements linearly from a
//! starting factor, CNPJ cycles the weight through 2..=9 from right to left.

use crate::utils::digits::{all_same_digit, digit_values, strip_non_digits};

/// CPF check digit over a progressively-extended base (9 or 10 digits).
///
/// The weight starts at `starting_weight` (10 for the first check digit,
/// 11 for the second) and decrements by one per position, left to right.
fn cpf_check_digit(digits: &[u32], starting_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (starting_weight - i as u32))
        .sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

/// CNPJ check digit over a 12- or 13-digit base.
///
/// The weight starts at `len - 7`, decrements per position, and wraps back to
/// 9 whenever it would drop below 2. This cyclic 2..=9 weighting is the part
/// that differs from CPF.
fn cnpj_check_digit(digits: &[u32]) -> u32 {
    let mut weight = digits.len() as u32 - 7;
    let mut sum = 0u32;
    for &d in digits {
        sum += d * weight;
        weight = if weight == 2 { 9 } else { weight - 1 };
    }
    let result = 11 - (sum % 11);
    if result > 9 {
        0
    } else {
        result
    }
}

/// Validate a Brazilian CPF. Accepts any formatting; non-digits are stripped
/// before validation. Total: malformed input yields `false`, never an error.
pub fn brazilian_cpf_validator(value: &str) -> bool {
    let cpf = strip_non_digits(value);

    if cpf.len() != 11 {
        return false;
    }

    if all_same_digit(&cpf) {
        return false;
    }

    let digits = digit_values(&cpf);
    cpf_check_digit(&digits[..9], 10) == digits[9]
        && cpf_check_digit(&digits[..10], 11) == digits[10]
}

/// Validate a Brazilian CNPJ. Same total/no-error contract as
/// [`brazilian_cpf_validator`].
pub fn brazilian_cnpj_validator(value: &str) -> bool {
    let cnpj = strip_non_digits(value);

    if cnpj.len() != 14 {
        return false;
    }

    if all_same_digit(&cnpj) {
        return false;
    }

    let digits = digit_values(&cnpj);
    cnpj_check_digit(&digits[..12]) == digits[12] && cnpj_check_digit(&digits[..13]) == digits[13]
}
