use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationMissingArgument,
    ValidationInvalidArgument,

    DateInvalidFormat,

    EncodingInvalidBase64,
    EncodingInvalidUtf8,

    ConfigInvalidMaskTable,

    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationMissingArgument => "validation.missing_argument",
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",

            ErrorCode::DateInvalidFormat => "date.invalid_format",

            ErrorCode::EncodingInvalidBase64 => "encoding.invalid_base64",
            ErrorCode::EncodingInvalidUtf8 => "encoding.invalid_utf8",

            ErrorCode::ConfigInvalidMaskTable => "config.invalid_mask_table",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }

    /// Process exit code for CLI use. Validation problems map to 2 so shell
    /// scripts can distinguish bad input from internal failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCode::ValidationMissingArgument
            | ErrorCode::ValidationInvalidArgument
            | ErrorCode::DateInvalidFormat
            | ErrorCode::EncodingInvalidBase64
            | ErrorCode::EncodingInvalidUtf8 => 2,
            ErrorCode::ConfigInvalidMaskTable
            | ErrorCode::InternalIoError
            | ErrorCode::InternalJsonError => 1,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InvalidArgumentDetails {
    field: String,
    problem: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    pub fn validation_missing_argument(arg: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ValidationMissingArgument,
            "Missing required argument",
            json!({ "arg": arg.into() }),
        )
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        let details = serde_json::to_value(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn date_invalid_format(value: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::DateInvalidFormat,
            "Invalid date format. Expected formats are yyyy-mm-dd or dd/mm/yyyy",
            json!({ "value": value.into() }),
        )
    }

    pub fn encoding_invalid_base64(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::EncodingInvalidBase64,
            "Input is not valid base64",
            json!({ "error": error.into() }),
        )
    }

    pub fn encoding_invalid_utf8(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::EncodingInvalidUtf8,
            "Decoded bytes are not valid UTF-8",
            json!({ "error": error.into() }),
        )
    }

    pub fn config_invalid_mask_table(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ConfigInvalidMaskTable,
            "Country mask table is not valid TOML",
            json!({ "error": error.into() }),
        )
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalIoError,
            "I/O error",
            json!({ "error": error.into(), "context": context }),
        )
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalJsonError,
            "JSON serialization error",
            json!({ "error": error.into(), "context": context }),
        )
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_dotted_identifiers() {
        assert_eq!(ErrorCode::DateInvalidFormat.as_str(), "date.invalid_format");
        assert_eq!(
            ErrorCode::ValidationInvalidArgument.as_str(),
            "validation.invalid_argument"
        );
    }

    #[test]
    fn validation_errors_exit_with_2() {
        assert_eq!(ErrorCode::DateInvalidFormat.exit_code(), 2);
        assert_eq!(ErrorCode::InternalJsonError.exit_code(), 1);
    }

    #[test]
    fn display_includes_code_and_message() {
        let err = Error::date_invalid_format("2023/01/01");
        let rendered = err.to_string();
        assert!(rendered.contains("date.invalid_format"));
        assert!(rendered.contains("Invalid date format"));
    }
}
