//! Canonical entity identifiers derived from article titles

use serde::{Deserialize, Serialize};

/// Canonical key for an entity
///
/// Derived from an article title. The title string is used verbatim as an
/// opaque key: two articles with the same title denote the same entity.
///
/// Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Create an identifier from an article title
    pub fn from_title(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The well-known classification target for physicist entities
pub const PHYSICIST: &str = "Physicist";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_title_same_identifier() {
        let a = Identifier::from_title("Albert Einstein");
        let b = Identifier::from("Albert Einstein");
        assert_eq!(a, b);
    }

    #[test]
    fn test_title_used_verbatim() {
        let id = Identifier::from_title("Niels Bohr");
        assert_eq!(id.as_str(), "Niels Bohr");
        assert_eq!(id.to_string(), "Niels Bohr");
    }
}
