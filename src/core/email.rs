//! Email address validation.

use std::sync::OnceLock;

use regex::Regex;

/// Local part up to 64 chars, domain up to 255 with a 2-24 letter TLD.
const EMAIL_PATTERN: &str = r"^[^\s@]{1,64}@[^\s@]{1,255}\.[A-Za-z]{2,24}$";

/// RFC 5321 caps the full address at 254 octets.
const MAX_EMAIL_LENGTH: usize = 254;

/// Validate an email address against the common-format pattern. Total;
/// returns `false` for anything unrecognized.
pub fn email_is_valid(email: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    if email.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}
