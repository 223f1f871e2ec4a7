//! Error types for the sentence generator.

use thiserror::Error;

use crate::category::WordCategory;

/// Result type for generator operations.
pub type GenResult<T> = Result<T, GenError>;

/// Errors that can occur while configuring or running a generator.
#[derive(Debug, Error)]
pub enum GenError {
    /// A caller-supplied argument is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The grammar graph has no successor list for a category.
    #[error("grammar graph has no entry for {0}")]
    MissingSuccessors(WordCategory),

    /// The word catalog has no words for a category.
    #[error("word catalog has no words for {0}")]
    MissingWords(WordCategory),

    /// The catalog and graph do not form a usable grammar.
    #[error("invalid grammar: {0}")]
    InvalidGrammar(String),

    /// Ending on a noun or verb was requested, but the walk entered a
    /// category from which neither is reachable.
    #[error("sentence walk cannot reach an ending word (NOUN or VERB)")]
    UnreachableEnding,

    /// A grammar file could not be parsed.
    #[error("grammar json: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenError {
    /// Returns true for static configuration defects, as opposed to bad call
    /// arguments.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::MissingSuccessors(_)
                | Self::MissingWords(_)
                | Self::InvalidGrammar(_)
                | Self::UnreachableEnding
                | Self::Json(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_category() {
        let err = GenError::MissingWords(WordCategory::Adverb);
        assert_eq!(err.to_string(), "word catalog has no words for ADVERB");
        let err = GenError::MissingSuccessors(WordCategory::EndAsk);
        assert_eq!(err.to_string(), "grammar graph has no entry for END_ASK");
    }

    #[test]
    fn classification() {
        assert!(GenError::MissingWords(WordCategory::Noun).is_configuration_error());
        assert!(GenError::UnreachableEnding.is_configuration_error());
        assert!(!GenError::InvalidArgument("min > max".into()).is_configuration_error());
    }
}
