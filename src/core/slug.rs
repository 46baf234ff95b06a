//! URL-friendly slug generation.

use crate::utils::text::remove_diacritics;

/// Build a slug: diacritics removed, lowercased, non-word characters dropped,
/// whitespace collapsed to single hyphens, no leading or trailing hyphen.
///
/// `"Olá Mundo!"` becomes `"ola-mundo"`.
pub fn create_slug(name: &str) -> String {
    let cleaned = remove_diacritics(name).to_lowercase();

    let mut out = String::with_capacity(cleaned.len());
    let mut prev_was_dash = false;

    for ch in cleaned.chars() {
        let normalized = match ch {
            'a'..='z' | '0'..='9' | '_' => Some(ch),
            _ if ch.is_whitespace() || ch == '-' => Some('-'),
            _ => None,
        };

        if let Some(c) = normalized {
            if c == '-' {
                if out.is_empty() || prev_was_dash {
                    continue;
                }
                out.push('-');
                prev_was_dash = true;
            } else {
                out.push(c);
                prev_was_dash = false;
            }
        }
    }

    while out.ends_with('-') {
        out.pop();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_slug() {
        assert_eq!(create_slug("Hello World!"), "hello-world");
    }

    #[test]
    fn removes_diacritics() {
        assert_eq!(create_slug("Olá Mundo!"), "ola-mundo");
        assert_eq!(create_slug("São João del-Rei"), "sao-joao-del-rei");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(create_slug("foo   bar -- baz"), "foo-bar-baz");
    }

    #[test]
    fn trims_edge_hyphens() {
        assert_eq!(create_slug("  --Hello--  "), "hello");
    }

    #[test]
    fn keeps_digits_and_underscores() {
        assert_eq!(create_slug("Release 2_0"), "release-2_0");
    }

    #[test]
    fn punctuation_only_yields_empty() {
        assert_eq!(create_slug("!@#$%"), "");
    }
}
