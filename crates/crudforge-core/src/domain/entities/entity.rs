//! The user-named resource a CRUD feature is generated for.

use std::fmt;
use std::str::FromStr;

use crate::domain::{error::DomainError, substitution::capitalize};

/// A validated entity name such as `customer` or `blogPost`.
///
/// The name is kept exactly as typed: it is used verbatim wherever the
/// templates use the lower-case placeholder, and with its first letter
/// upper-cased wherever they use the capitalized one. Because it becomes a
/// directory name and is spliced into source text, it must start with an
/// ASCII letter and otherwise contain only ASCII letters, digits, `-` or `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityName(String);

impl EntityName {
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref();

        if raw.trim().is_empty() {
            return Err(DomainError::MissingArgument { argument: "entity" });
        }

        let invalid = |reason: &str| DomainError::InvalidEntityName {
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        let mut chars = raw.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {}
            _ => return Err(invalid("must start with an ASCII letter")),
        }

        if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_')) {
            return Err(invalid(&format!("character '{bad}' is not allowed")));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `order` -> `Order`. Only the first character changes.
    pub fn capitalized(&self) -> String {
        capitalize(&self.0)
    }

    /// Key of the entity's collection in the mock data store.
    ///
    /// Pluralization is naive on purpose: `order` -> `orders`, `box` -> `boxs`.
    pub fn collection_key(&self) -> String {
        format!("{}s", self.0)
    }
}

impl FromStr for EntityName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for EntityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
