//! Structured error types for the pagination engine.
//!
//! Two variants cover the real failure sources: JSON input that does not
//! describe a workbook, and table geometry that cannot be split into pages.

use thiserror::Error;

/// The unified error type returned by all public API functions.
#[derive(Debug, Error)]
pub enum Error {
    /// JSON input failed to parse as a valid workbook document.
    #[error("Failed to parse workbook: {source}{hint}")]
    Parse {
        #[source]
        source: serde_json::Error,
        hint: String,
    },

    /// A table's geometry cannot be paginated: a height is non-positive
    /// (rows not yet measured) or a single row exceeds the usable height of
    /// a full page. Signals a precondition violation, never retried.
    #[error("Invalid table geometry: {0}")]
    InvalidGeometry(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "\n  Hint: Check for trailing commas, missing quotes, or unescaped characters."
            }
            serde_json::error::Category::Data => {
                "\n  Hint: The JSON is valid but doesn't match the workbook schema. Check field names and types."
            }
            serde_json::error::Category::Eof => {
                "\n  Hint: Unexpected end of input. Is the JSON truncated?"
            }
            serde_json::error::Category::Io => "",
        }
        .to_string();
        Error::Parse { source: e, hint }
    }
}
