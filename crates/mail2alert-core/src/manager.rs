//! Alert manager
//!
//! Manager objects are handed mail messages. Based on the configuration
//! and mail content, they determine whether a message is of interest and
//! which recipients should be alerted.

use crate::actions::Actions;
use crate::message::Message;
use crate::predicates::PredicateRegistry;
use crate::rules::{compile_rules, Rule};
use mail2alert_common::config::{Config, WantedConfig};
use mail2alert_common::Result;
use tracing::{debug, info, warn};

/// The outbound alert produced for a processed message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    /// Envelope sender, passed through unchanged
    pub mail_from: String,
    /// Recipients merged across all matching rules, in rule order
    pub recipients: Vec<String>,
    /// Raw message content, byte-for-byte as received
    pub content: Vec<u8>,
}

/// Gates and classifies incoming mail against the configured rules
#[derive(Debug)]
pub struct Manager {
    wanted: WantedConfig,
    rules: Vec<Rule>,
}

impl Manager {
    /// Build a manager from configuration, using the built-in predicates
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_registry(config, &PredicateRegistry::builtin())
    }

    /// Build a manager with a caller-supplied predicate registry
    ///
    /// All rules are compiled here, so an unknown predicate reference
    /// fails before any message is processed.
    pub fn with_registry(config: &Config, registry: &PredicateRegistry) -> Result<Self> {
        let rules = compile_rules(&config.rules, registry)?;
        info!("Started alert manager with {} rules", rules.len());

        if config.messages_we_want.to.is_none() && config.messages_we_want.from.is_none() {
            warn!("Neither to nor from is set under messages-we-want; no mail will be processed");
        }

        Ok(Self {
            wanted: config.messages_we_want.clone(),
            rules,
        })
    }

    /// Determine whether the manager is interested in a certain message
    ///
    /// A configured `to` filter wins over `from` and matches by exact
    /// membership in the envelope recipients; a `from` filter matches the
    /// envelope sender exactly. With neither configured, nothing is
    /// wanted. Never fails.
    pub fn wants_message(&self, mail_from: &str, rcpt_tos: &[String], _content: &[u8]) -> bool {
        debug!(
            "We want to: {:?} or from: {:?}",
            self.wanted.to, self.wanted.from
        );
        debug!("We got to: {:?} and from: {}", rcpt_tos, mail_from);

        if let Some(ref wanted_to) = self.wanted.to {
            return rcpt_tos.iter().any(|rcpt| rcpt == wanted_to);
        }
        if let Some(ref wanted_from) = self.wanted.from {
            return wanted_from == mail_from;
        }
        false
    }

    /// Classify one message, merging the recipients of every matching rule
    ///
    /// The sender and raw content pass through untouched. A message that
    /// matches no rule yields an empty recipient list without error;
    /// content that cannot be parsed into a [`Message`] is an error.
    pub fn process_message(
        &self,
        mail_from: &str,
        rcpt_tos: &[String],
        content: &[u8],
    ) -> Result<AlertMessage> {
        debug!(
            "process_message(\"{}\", {:?}, {} bytes)",
            mail_from,
            rcpt_tos,
            content.len()
        );

        let message = Message::parse(content)?;
        debug!("Extracted message with subject {:?}", message.subject());

        let mut actions = Actions::new();
        for rule in &self.rules {
            debug!("Check {}", rule.name());
            if let Some(recipients) = rule.check(&message) {
                debug!("Rule {} matched", rule.name());
                actions.extend_mailto(recipients.iter().cloned());
            }
        }

        Ok(AlertMessage {
            mail_from: mail_from.to_string(),
            recipients: actions.into_mailto(),
            content: content.to_vec(),
        })
    }

    /// The compiled rules, in configuration order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
