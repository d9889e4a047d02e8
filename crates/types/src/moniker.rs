//! Resource identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable, opaque identifier for a resource, unique within a snapshot.
///
/// Monikers are the join key between an old and a new snapshot and
/// between dependency graph vertices. Equality is plain value equality;
/// ordering is lexicographic and exists solely to make topological
/// tie-breaking deterministic (see `drift_graph::sequence`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Moniker(String);

impl Moniker {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Moniker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Moniker {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Moniker {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Dotted resource type token, e.g. `aws.ec2.Instance`.
///
/// The leading segment up to the first `.` is the *package*; the
/// provider registry routes on that segment alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceType(String);

impl ResourceType {
    #[must_use]
    pub fn new(type_token: impl Into<String>) -> Self {
        Self(type_token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The leading dotted segment, used to look up a provider.
    #[must_use]
    pub fn package(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ResourceType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ResourceType {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_is_leading_dotted_segment() {
        let ty = ResourceType::new("aws.ec2.Instance");
        assert_eq!(ty.package(), "aws");
    }

    #[test]
    fn package_of_bare_token_is_itself() {
        let ty = ResourceType::new("standalone");
        assert_eq!(ty.package(), "standalone");
    }

    #[test]
    fn monikers_order_lexicographically() {
        let mut ms = vec![Moniker::new("b"), Moniker::new("a"), Moniker::new("c")];
        ms.sort();
        assert_eq!(ms, vec![Moniker::new("a"), Moniker::new("b"), Moniker::new("c")]);
    }
}
