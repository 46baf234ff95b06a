//! Password strength checking.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PasswordIssue {
    PasswordLength,
    NoNumber,
    NoUpperCaseLetter,
    NoLowerCaseLetter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStrength {
    pub password_is_valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<PasswordIssue>,
}

/// Check a password against the baseline criteria: at least 8 characters,
/// one digit, one uppercase letter, one lowercase letter. The returned
/// payload lists every failed criterion, not just the first.
pub fn password_strength(password: &str) -> PasswordStrength {
    let mut errors = Vec::new();

    if password.chars().count() < 8 {
        errors.push(PasswordIssue::PasswordLength);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(PasswordIssue::NoNumber);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push(PasswordIssue::NoUpperCaseLetter);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push(PasswordIssue::NoLowerCaseLetter);
    }

    PasswordStrength {
        password_is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_password_passes() {
        let result = password_strength("StrongP@ssword1");
        assert!(result.password_is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn weak_password_lists_all_failures() {
        let result = password_strength("weak");
        assert!(!result.password_is_valid);
        assert_eq!(
            result.errors,
            vec![
                PasswordIssue::PasswordLength,
                PasswordIssue::NoNumber,
                PasswordIssue::NoUpperCaseLetter,
            ]
        );
    }

    #[test]
    fn missing_lowercase_is_reported() {
        let result = password_strength("ALLCAPS123");
        assert_eq!(result.errors, vec![PasswordIssue::NoLowerCaseLetter]);
    }

    #[test]
    fn issues_serialize_in_camel_case() {
        let result = password_strength("weak");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"passwordLength\""));
        assert!(json.contains("\"noUpperCaseLetter\""));
        assert!(json.contains("\"passwordIsValid\":false"));
    }
}
