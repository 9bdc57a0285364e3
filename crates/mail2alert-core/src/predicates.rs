//! Predicate namespace
//!
//! Rules reference boolean predicates by provider group and name, e.g.
//! `mail.in_subject("disk", "alert")`. Providers live in a fixed table
//! built at startup; resolving a reference against the table happens when
//! the rule set is compiled, never per message.

use crate::message::Message;
use mail2alert_common::{Error, Result};
use std::collections::HashMap;

/// A compiled boolean test over a parsed message
pub type Predicate = Box<dyn Fn(&Message) -> bool + Send + Sync>;

/// A named group of predicate constructors
pub trait PredicateProvider: Send + Sync {
    /// Provider name rules refer to (e.g. "mail")
    fn name(&self) -> &'static str;

    /// Build the named predicate from its configured arguments
    fn build(&self, predicate: &str, args: &[String]) -> Result<Predicate>;
}

/// Table of predicate providers, keyed by provider name
pub struct PredicateRegistry {
    providers: HashMap<&'static str, Box<dyn PredicateProvider>>,
}

impl PredicateRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Registry holding the built-in "mail" provider
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(MailPredicates));
        registry
    }

    /// Register a provider, replacing any existing provider with the same name
    pub fn register(&mut self, provider: Box<dyn PredicateProvider>) {
        self.providers.insert(provider.name(), provider);
    }

    /// Resolve and build a predicate from a (provider, name, args) reference
    pub fn build(&self, provider: &str, predicate: &str, args: &[String]) -> Result<Predicate> {
        let found = self
            .providers
            .get(provider)
            .ok_or_else(|| Error::Predicate(format!("Unknown predicate provider: {}", provider)))?;
        found.build(predicate, args)
    }
}

impl Default for PredicateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Built-in predicates over mail content
pub struct MailPredicates;

impl PredicateProvider for MailPredicates {
    fn name(&self) -> &'static str {
        "mail"
    }

    fn build(&self, predicate: &str, args: &[String]) -> Result<Predicate> {
        match predicate {
            "in_subject" => Ok(in_subject(args)),
            other => Err(Error::Predicate(format!(
                "Unknown mail predicate: {}",
                other
            ))),
        }
    }
}

/// True iff every word appears case-insensitively in the subject
///
/// Zero words is vacuously true. Substring match, not word-boundary match.
fn in_subject(words: &[String]) -> Predicate {
    let words: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    Box::new(move |msg: &Message| {
        let subject = msg.subject().to_lowercase();
        words.iter().all(|word| subject.contains(word.as_str()))
    })
}
