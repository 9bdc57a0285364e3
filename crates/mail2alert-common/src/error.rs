//! Error types for Mail2Alert

use thiserror::Error;

/// Main error type for Mail2Alert
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Message error: {0}")]
    Message(String),

    #[error("Rule error: {0}")]
    Rule(String),

    #[error("Predicate error: {0}")]
    Predicate(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Mail2Alert
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Error::Config(_) => "CONFIG_ERROR",
            Error::Message(_) => "MESSAGE_ERROR",
            Error::Rule(_) => "RULE_ERROR",
            Error::Predicate(_) => "PREDICATE_ERROR",
            Error::Other(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::Config("bad".into()).code(), "CONFIG_ERROR");
        assert_eq!(Error::Message("no subject".into()).code(), "MESSAGE_ERROR");
        assert_eq!(Error::Predicate("unknown".into()).code(), "PREDICATE_ERROR");
    }

    #[test]
    fn test_error_display() {
        let err = Error::Message("Message has no Subject line".into());
        assert_eq!(err.to_string(), "Message error: Message has no Subject line");
    }
}
