//! Message extraction
//!
//! Parses raw mail bytes into the minimal structured record the rule
//! engine evaluates. Only the subject line is extracted today.

use mail2alert_common::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

fn subject_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?im)^Subject:(.+)$").expect("static pattern compiles"))
}

/// A parsed mail message
///
/// Holds the fields rules can test; more fields can be added as
/// predicates grow. Read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    subject: String,
}

impl Message {
    /// Parse raw message bytes
    ///
    /// The header name is matched case-insensitively and the first
    /// Subject line wins. Fails when the content is not valid UTF-8 or
    /// carries no Subject line.
    pub fn parse(raw: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(raw)
            .map_err(|e| Error::Message(format!("Message is not valid UTF-8: {}", e)))?;

        let captures = subject_pattern()
            .captures(text)
            .ok_or_else(|| Error::Message("Message has no Subject line".to_string()))?;

        Ok(Self {
            subject: captures[1].trim().to_string(),
        })
    }

    /// The trimmed text following the Subject header
    pub fn subject(&self) -> &str {
        &self.subject
    }
}
