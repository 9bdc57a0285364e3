//! Mail2Alert Core - rule evaluation for mail-triggered alerting
//!
//! This crate provides the classification path for Mail2Alert: parsing an
//! incoming mail message into its minimal structured form, evaluating the
//! configured rules against it through the predicate registry, and
//! aggregating the recipients of every matching rule.

pub mod actions;
pub mod manager;
pub mod message;
pub mod predicates;
pub mod rules;

pub use actions::Actions;
pub use manager::{AlertMessage, Manager};
pub use message::Message;
pub use predicates::{MailPredicates, Predicate, PredicateProvider, PredicateRegistry};
pub use rules::Rule;
