use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enumeration column holds a value the application does not know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown value '{value}' stored in column {column}")]
    InvalidStoredValue {
        /// The column that was read
        column: &'static str,
        /// The unrecognized value
        value: String,
    },

    /// Review template questions are not a JSON array of strings.
    #[error("Failed to parse questions of review template {template_id}: {source}")]
    InvalidTemplateQuestions {
        /// The template whose questions failed to parse
        template_id: String,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },
}
