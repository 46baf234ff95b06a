//! Date helpers: age calculation, birthdate gating, and the
//! `yyyy-mm-dd` ⇄ `dd/mm/yyyy` format flip.

use chrono::{Datelike, Local, NaiveDate};

use crate::core::error::{Error, Result};

/// Ages above this are treated as data-entry mistakes rather than people.
const MAX_PLAUSIBLE_AGE: i32 = 105;

/// Parse a birthdate in either `yyyy-mm-dd` or `dd/mm/yyyy` form.
pub fn parse_birthdate(value: &str) -> Option<NaiveDate> {
    if value.contains('-') {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
    } else if value.contains('/') {
        NaiveDate::parse_from_str(value, "%d/%m/%Y").ok()
    } else {
        None
    }
}

/// Whole years between `birth` and `today`, month and day aware.
fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Age in whole years as of today.
pub fn calculate_age(birth_date: NaiveDate) -> i32 {
    age_on(birth_date, Local::now().date_naive())
}

/// Check a birthdate string against the 18+ gate.
///
/// With `allow_minors` the gate relaxes to any plausible age. Unparseable
/// input yields `false`; this stays total like the other validators.
pub fn birthdate_is_18_plus(birthday: &str, allow_minors: bool) -> bool {
    let Some(birth) = parse_birthdate(birthday) else {
        return false;
    };
    let age = age_on(birth, Local::now().date_naive());

    if allow_minors {
        return (0..MAX_PLAUSIBLE_AGE).contains(&age);
    }
    (18..MAX_PLAUSIBLE_AGE).contains(&age)
}

/// Convert `yyyy-mm-dd` to `dd/mm/yyyy` and vice versa.
///
/// The one fallible transformation in the crate: any other shape is a
/// `date.invalid_format` error rather than a silent pass-through.
pub fn convert_date_format(date: &str) -> Result<String> {
    let bytes = date.as_bytes();

    let is_iso = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && date
            .chars()
            .enumerate()
            .all(|(i, c)| matches!(i, 4 | 7) || c.is_ascii_digit());
    if is_iso {
        return Ok(format!("{}/{}/{}", &date[8..10], &date[5..7], &date[0..4]));
    }

    let is_br = bytes.len() == 10
        && bytes[2] == b'/'
        && bytes[5] == b'/'
        && date
            .chars()
            .enumerate()
            .all(|(i, c)| matches!(i, 2 | 5) || c.is_ascii_digit());
    if is_br {
        return Ok(format!("{}-{}-{}", &date[6..10], &date[3..5], &date[0..2]));
    }

    Err(Error::date_invalid_format(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_iso_to_brazilian() {
        assert_eq!(convert_date_format("2023-06-27").unwrap(), "27/06/2023");
    }

    #[test]
    fn converts_brazilian_to_iso() {
        assert_eq!(convert_date_format("27/06/2023").unwrap(), "2023-06-27");
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(convert_date_format("2023.06.27").is_err());
        assert!(convert_date_format("27-06-2023x").is_err());
        assert!(convert_date_format("").is_err());
        let err = convert_date_format("junk").unwrap_err();
        assert_eq!(err.code.as_str(), "date.invalid_format");
    }

    #[test]
    fn age_counts_whole_years() {
        let birth = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
        let before = NaiveDate::from_ymd_opt(2020, 6, 14).unwrap();
        let on = NaiveDate::from_ymd_opt(2020, 6, 15).unwrap();
        let after = NaiveDate::from_ymd_opt(2020, 6, 16).unwrap();
        assert_eq!(age_on(birth, before), 29);
        assert_eq!(age_on(birth, on), 30);
        assert_eq!(age_on(birth, after), 30);
    }

    #[test]
    fn parses_both_birthdate_formats() {
        let expected = NaiveDate::from_ymd_opt(2000, 1, 31).unwrap();
        assert_eq!(parse_birthdate("2000-01-31"), Some(expected));
        assert_eq!(parse_birthdate("31/01/2000"), Some(expected));
        assert_eq!(parse_birthdate("31.01.2000"), None);
        assert_eq!(parse_birthdate("2000-02-30"), None);
    }

    #[test]
    fn adult_birthdate_passes_gate() {
        let today = Local::now().date_naive();
        let eighteen_years_ago = NaiveDate::from_ymd_opt(
            today.year() - 18,
            today.month(),
            today.day().min(28),
        )
        .unwrap();
        let formatted = eighteen_years_ago.format("%Y-%m-%d").to_string();
        assert!(birthdate_is_18_plus(&formatted, false));
    }

    #[test]
    fn minor_birthdate_fails_unless_allowed() {
        let today = Local::now().date_naive();
        let ten_years_ago =
            NaiveDate::from_ymd_opt(today.year() - 10, today.month(), today.day().min(28)).unwrap();
        let formatted = ten_years_ago.format("%d/%m/%Y").to_string();
        assert!(!birthdate_is_18_plus(&formatted, false));
        assert!(birthdate_is_18_plus(&formatted, true));
    }

    #[test]
    fn unparseable_birthdate_is_false() {
        assert!(!birthdate_is_18_plus("not a date", false));
        assert!(!birthdate_is_18_plus("not a date", true));
    }
}
