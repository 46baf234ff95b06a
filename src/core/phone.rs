//! Telephone validation and the country-coded cellphone mask table.
//!
//! The mask table is immutable configuration: two-letter country code to
//! template string, with `9` as the digit placeholder. The built-in table is
//! embedded TOML parsed once on first use; callers who own their own table
//! can construct a [`MaskTable`] from any map.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::core::error::{Error, Result};
use crate::core::masks::apply_mask_template;
use crate::log_status;
use crate::utils::digits::strip_non_digits;

const BUILTIN_MASKS: &str = include_str!("country_masks.toml");

/// Accepts optional +55/0055 country prefix, optional two-digit area code
/// (with or without parentheses), and an 8- or 9-digit subscriber number.
const TELEPHONE_PATTERN: &str =
    r"^(?:(?:\+|00)?(55)\s?)?(?:\(?([1-9][0-9])\)?\s?)?(?:((?:9\d|[2-9])\d{3})-?(\d{4}))$";

/// Validate a Brazilian telephone number in its common written forms.
/// Total: unrecognized shapes yield `false`.
pub fn brazilian_telephone_validator(telephone: &str) -> bool {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TELEPHONE_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(telephone))
}

/// Immutable lookup table from two-letter country code to mask template.
pub struct MaskTable {
    masks: BTreeMap<String, String>,
}

impl MaskTable {
    /// Build a table from a caller-owned map.
    pub fn from_map(masks: BTreeMap<String, String>) -> Self {
        Self { masks }
    }

    /// Parse a table from a TOML document of `CODE = "template"` pairs.
    pub fn from_toml(content: &str) -> Result<Self> {
        let masks: BTreeMap<String, String> =
            toml::from_str(content).map_err(|e| Error::config_invalid_mask_table(e.to_string()))?;
        Ok(Self { masks })
    }

    /// The built-in table, parsed once on first use.
    pub fn builtin() -> &'static MaskTable {
        static TABLE: OnceLock<MaskTable> = OnceLock::new();
        TABLE.get_or_init(|| match MaskTable::from_toml(BUILTIN_MASKS) {
            Ok(table) => table,
            Err(e) => {
                log_status!("config", "Built-in mask table failed to parse: {}", e);
                MaskTable::from_map(BTreeMap::new())
            }
        })
    }

    /// Template for a country code, if one is configured.
    pub fn template(&self, country: &str) -> Option<&str> {
        self.masks.get(country).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    /// Apply the country's mask to a raw phone string. Unknown country codes
    /// are not an error: the input passes through as normalized digits.
    pub fn apply(&self, country: &str, phone: &str) -> String {
        match self.template(country) {
            Some(template) => apply_mask_template(template, phone),
            None => strip_non_digits(phone),
        }
    }
}

/// Apply the built-in mask table. See [`MaskTable::apply`].
pub fn global_cellphone_mask(country: &str, phone: &str) -> String {
    MaskTable::builtin().apply(country, phone)
}
