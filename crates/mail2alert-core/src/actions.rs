//! Action aggregation
//!
//! Collects the actions of every matched rule into the combined result
//! handed to the dispatch layer.

/// Recipients merged across matched rules, in rule order
///
/// Duplicates are preserved; callers dedupe if their dispatch layer
/// requires it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Actions {
    mailto: Vec<String>,
}

impl Actions {
    /// Create an empty aggregation
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one matched rule's recipients
    pub fn extend_mailto<I>(&mut self, recipients: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.mailto.extend(recipients);
    }

    /// The merged recipient list
    pub fn mailto(&self) -> &[String] {
        &self.mailto
    }

    /// Consume the aggregation, yielding the merged recipient list
    pub fn into_mailto(self) -> Vec<String> {
        self.mailto
    }

    /// Whether any rule contributed a recipient
    pub fn is_empty(&self) -> bool {
        self.mailto.is_empty()
    }
}
