// Public modules
pub mod currency;
pub mod dates;
pub mod documents;
pub mod email;
pub mod encoding;
pub mod error;
pub mod masks;
pub mod names;
pub mod password;
pub mod phone;
pub mod slug;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
