//! Entity-aware token substitution.
//!
//! Templates are parameterized by a single reserved word, the placeholder
//! (`sample` by default). Instantiating a template for an entity replaces
//!
//! | Template token | Replacement          | Example (`order`) |
//! |----------------|----------------------|-------------------|
//! | `sample`       | entity as given      | `order`           |
//! | `Sample`       | entity, capitalized  | `Order`           |
//!
//! in every path component and every file body.
//!
//! Both forms are matched in a single left-to-right scan, so text that was
//! just inserted is never scanned again: an entity called `Sampler` cannot
//! be rewritten twice into `Samplerr`.

use serde::{Deserialize, Serialize};

use crate::domain::{entities::common::RelativePath, entities::entity::EntityName, error::DomainError};

/// Upper-case the first code point, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The reserved word templates use in place of the entity name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    lower: String,
    capitalized: String,
}

impl Placeholder {
    pub const DEFAULT: &'static str = "sample";

    /// The word must be lower-case ASCII and start with a letter so that its
    /// capitalized form is distinct and has the same length.
    pub fn new(word: impl Into<String>) -> Result<Self, DomainError> {
        let word = word.into();
        let invalid = |reason: &str| DomainError::InvalidPlaceholder {
            placeholder: word.clone(),
            reason: reason.to_string(),
        };

        match word.chars().next() {
            None => return Err(invalid("must not be empty")),
            Some(c) if !c.is_ascii_lowercase() => {
                return Err(invalid("must start with a lower-case ASCII letter"));
            }
            _ => {}
        }
        if !word.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
            return Err(invalid("only lower-case ASCII letters, digits and '_' are allowed"));
        }

        Ok(Self {
            capitalized: capitalize(&word),
            lower: word,
        })
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn capitalized(&self) -> &str {
        &self.capitalized
    }

    /// True if `text` still contains the placeholder in either casing.
    pub fn occurs_in(&self, text: &str) -> bool {
        text.contains(&self.lower) || text.contains(&self.capitalized)
    }
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            lower: Self::DEFAULT.to_string(),
            capitalized: capitalize(Self::DEFAULT),
        }
    }
}

/// How strictly a placeholder occurrence must be delimited to be replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubstitutionMode {
    /// Replace every substring occurrence, even inside other words.
    #[default]
    Literal,
    /// Replace only occurrences standing at identifier boundaries:
    /// `sampleId`, `useSample`, `sample_list` are replaced;
    /// `samples` and `resample` are not.
    Boundary,
}

impl SubstitutionMode {
    fn accepts(self, before: Option<char>, after: Option<char>, capitalized: bool) -> bool {
        match self {
            Self::Literal => true,
            Self::Boundary => {
                let starts_word = match before {
                    None => true,
                    Some(c) if !c.is_alphanumeric() => true,
                    // camelCase join: `useSample`
                    Some(c) => capitalized && (c.is_lowercase() || c.is_numeric()),
                };
                let ends_word = match after {
                    None => true,
                    Some(c) => !(c.is_lowercase() || c.is_numeric()),
                };
                starts_word && ends_word
            }
        }
    }
}

/// A placeholder bound to a concrete entity.
#[derive(Debug, Clone)]
pub struct TokenSubstitution {
    placeholder: Placeholder,
    lower: String,
    capitalized: String,
    mode: SubstitutionMode,
}

impl TokenSubstitution {
    pub fn new(placeholder: Placeholder, entity: &EntityName, mode: SubstitutionMode) -> Self {
        Self {
            placeholder,
            lower: entity.as_str().to_string(),
            capitalized: entity.capitalized(),
            mode,
        }
    }

    pub fn placeholder(&self) -> &Placeholder {
        &self.placeholder
    }

    /// Rewrite a text body.
    pub fn apply(&self, text: &str) -> String {
        let lower = self.placeholder.lower();
        let upper = self.placeholder.capitalized();

        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        let mut before: Option<char> = None;

        while let Some(ch) = rest.chars().next() {
            let hit = if rest.starts_with(lower) {
                Some((lower.len(), self.lower.as_str(), false))
            } else if rest.starts_with(upper) {
                Some((upper.len(), self.capitalized.as_str(), true))
            } else {
                None
            };

            if let Some((len, replacement, capitalized)) = hit {
                let after = rest[len..].chars().next();
                if self.mode.accepts(before, after, capitalized) {
                    out.push_str(replacement);
                    before = rest[..len].chars().next_back();
                    rest = &rest[len..];
                    continue;
                }
            }

            out.push(ch);
            before = Some(ch);
            rest = &rest[ch.len_utf8()..];
        }

        out
    }

    /// Rewrite every component of a relative path.
    pub fn apply_path(&self, path: &RelativePath) -> RelativePath {
        path.map_components(|part| self.apply(part))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(entity: &str) -> TokenSubstitution {
        TokenSubstitution::new(
            Placeholder::default(),
            &EntityName::parse(entity).unwrap(),
            SubstitutionMode::Literal,
        )
    }

    fn boundary(entity: &str) -> TokenSubstitution {
        TokenSubstitution::new(
            Placeholder::default(),
            &EntityName::parse(entity).unwrap(),
            SubstitutionMode::Boundary,
        )
    }

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize("order"), "Order");
        assert_eq!(capitalize("blogPost"), "BlogPost");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    #[test]
    fn replaces_both_casings() {
        let sub = literal("order");
        assert_eq!(
            sub.apply("export type Sample = { id: string };\nconst sample: Sample[] = [];"),
            "export type Order = { id: string };\nconst order: Order[] = [];"
        );
    }

    #[test]
    fn literal_mode_replaces_inside_words() {
        let sub = literal("order");
        assert_eq!(sub.apply("samples useSamples resample"), "orders useOrders reorder");
    }

    #[test]
    fn upper_case_token_is_left_alone() {
        assert_eq!(literal("order").apply("SAMPLE_SIZE"), "SAMPLE_SIZE");
    }

    #[test]
    fn inserted_text_is_not_rescanned() {
        let sub = literal("Sampler");
        assert_eq!(sub.apply("Sample sample"), "Sampler Sampler");
    }

    #[test]
    fn boundary_mode_skips_embedded_tokens() {
        let sub = boundary("order");
        assert_eq!(
            sub.apply("sample sampleId useSample sample_list samples resample"),
            "order orderId useOrder order_list samples resample"
        );
    }

    #[test]
    fn result_never_contains_placeholder() {
        let sub = literal("widget");
        let text = "SampleForm sampleService SAMPLE sample.ts Samplesample";
        assert!(!Placeholder::default().occurs_in(&sub.apply(text)));
    }

    #[test]
    fn paths_are_rewritten_per_component() {
        let sub = literal("order");
        let path = RelativePath::new("sample/SampleForm.tsx");
        assert_eq!(sub.apply_path(&path).to_slash_string(), "order/OrderForm.tsx");
    }

    #[test]
    fn placeholder_validation() {
        assert!(Placeholder::new("item").is_ok());
        assert!(Placeholder::new("").is_err());
        assert!(Placeholder::new("Item").is_err());
        assert!(Placeholder::new("it-em").is_err());
        assert_eq!(Placeholder::new("item").unwrap().capitalized(), "Item");
    }
}
