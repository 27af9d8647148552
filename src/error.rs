//! Error types for the test card generator

use thiserror::Error;

/// Main error type for generation and output operations
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Request rejected before any generation happened
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unexpected failure while synthesizing a batch
    #[error("{category}: {message}")]
    Generation {
        /// Short name of the failure kind
        category: String,
        /// Human readable details
        message: String,
    },

    /// Writing generated text to disk failed
    #[error("Save error: {0}")]
    Save(String),

    /// JSON export failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl GeneratorError {
    /// Build a generation error from a category and a message
    pub fn generation(category: &str, message: impl Into<String>) -> Self {
        GeneratorError::Generation {
            category: category.to_string(),
            message: message.into(),
        }
    }

    /// Short category name, used as the title when surfacing the error
    pub fn category(&self) -> &str {
        match self {
            GeneratorError::InvalidInput(_) => "InvalidInput",
            GeneratorError::Generation { category, .. } => category.as_str(),
            GeneratorError::Save(_) => "SaveError",
            GeneratorError::Serialization(_) => "SerializationError",
        }
    }

    /// The error's message without the variant's display prefix
    pub fn detail(&self) -> String {
        match self {
            GeneratorError::InvalidInput(msg)
            | GeneratorError::Save(msg)
            | GeneratorError::Serialization(msg) => msg.clone(),
            GeneratorError::Generation { .. } => self.to_string(),
        }
    }

    /// True when the request itself was rejected
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, GeneratorError::InvalidInput(_))
    }
}

impl From<serde_json::Error> for GeneratorError {
    fn from(err: serde_json::Error) -> Self {
        GeneratorError::Serialization(err.to_string())
    }
}

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
