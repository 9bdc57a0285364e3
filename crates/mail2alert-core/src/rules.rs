//! Rule compilation and evaluation
//!
//! A rule pairs one compiled predicate with the recipients to notify when
//! it matches. Predicate references are resolved against the registry
//! when the rule set is compiled, so a bad reference fails at startup
//! rather than in the middle of processing a message.

use crate::message::Message;
use crate::predicates::{Predicate, PredicateRegistry};
use mail2alert_common::config::RuleConfig;
use mail2alert_common::Result;
use std::fmt;

/// A single compiled alerting rule
pub struct Rule {
    name: String,
    predicate: Predicate,
    mailto: Vec<String>,
}

impl Rule {
    /// Compile a configured rule against the predicate registry
    pub fn compile(config: &RuleConfig, registry: &PredicateRegistry) -> Result<Self> {
        let when = &config.when;
        let predicate = registry.build(&when.provider, &when.predicate, &when.args)?;

        Ok(Self {
            name: format!(
                "{}.{}({})",
                when.provider,
                when.predicate,
                when.args.join(", ")
            ),
            predicate,
            mailto: config.then.mailto.clone(),
        })
    }

    /// Display name of the rule's condition, for logging
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluate against a message; a matched rule yields its recipients
    pub fn check(&self, message: &Message) -> Option<&[String]> {
        if (self.predicate)(message) {
            Some(&self.mailto)
        } else {
            None
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("mailto", &self.mailto)
            .finish()
    }
}

/// Compile every configured rule, preserving configuration order
pub fn compile_rules(configs: &[RuleConfig], registry: &PredicateRegistry) -> Result<Vec<Rule>> {
    configs
        .iter()
        .map(|config| Rule::compile(config, registry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mail2alert_common::config::{ThenConfig, WhenConfig};
    use pretty_assertions::assert_eq;

    fn rule_config(predicate: &str, args: &[&str], mailto: &[&str]) -> RuleConfig {
        RuleConfig {
            when: WhenConfig {
                provider: "mail".to_string(),
                predicate: predicate.to_string(),
                args: args.iter().map(|a| a.to_string()).collect(),
            },
            then: ThenConfig {
                mailto: mailto.iter().map(|m| m.to_string()).collect(),
            },
        }
    }

    #[test]
    fn test_matched_rule_yields_recipients() {
        let registry = PredicateRegistry::builtin();
        let rule = Rule::compile(&rule_config("in_subject", &["disk"], &["oncall@x"]), &registry)
            .unwrap();

        let msg = Message::parse(b"Subject: Disk Alert\n\nbody").unwrap();
        assert_eq!(rule.check(&msg), Some(&["oncall@x".to_string()][..]));
    }

    #[test]
    fn test_unmatched_rule_yields_nothing() {
        let registry = PredicateRegistry::builtin();
        let rule = Rule::compile(
            &rule_config("in_subject", &["network"], &["netops@x"]),
            &registry,
        )
        .unwrap();

        let msg = Message::parse(b"Subject: Disk Alert\n\nbody").unwrap();
        assert_eq!(rule.check(&msg), None);
    }

    #[test]
    fn test_rule_name() {
        let registry = PredicateRegistry::builtin();
        let rule = Rule::compile(
            &rule_config("in_subject", &["disk", "alert"], &["oncall@x"]),
            &registry,
        )
        .unwrap();

        assert_eq!(rule.name(), "mail.in_subject(disk, alert)");
    }

    #[test]
    fn test_bad_reference_fails_at_compile() {
        let registry = PredicateRegistry::builtin();
        let err =
            Rule::compile(&rule_config("in_body", &["disk"], &["oncall@x"]), &registry).unwrap_err();
        assert_eq!(err.code(), "PREDICATE_ERROR");
    }

    #[test]
    fn test_compile_rules_preserves_order() {
        let registry = PredicateRegistry::builtin();
        let rules = compile_rules(
            &[
                rule_config("in_subject", &["disk"], &["oncall@x"]),
                rule_config("in_subject", &["network"], &["netops@x"]),
            ],
            &registry,
        )
        .unwrap();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].name(), "mail.in_subject(disk)");
        assert_eq!(rules[1].name(), "mail.in_subject(network)");
    }
}
