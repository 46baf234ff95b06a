//! Generic utility primitives with zero domain knowledge.
//!
//! - `digits` - Digit-sequence normalization
//! - `random` - Random numbers and strings
//! - `text` - String transforms (diacritics, capitalization, truncation)

pub mod digits;
pub mod random;
pub mod text;
