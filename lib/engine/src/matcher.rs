//! Preference matching with justification
//!
//! Re-ranks the cosine similarity output using literal per-attribute overlap
//! between the stated preferences and each item's attribute values. Overlap
//! count is the primary key; cosine similarity breaks ties; remaining ties
//! fall back to catalog order via the stable sort.

use serde::Serialize;
use std::cmp::Ordering;

use fromage_core::{Attribute, Item};

/// Sentinel a caller uses to state no preference for an attribute.
///
/// Distinct from the missing-attribute sentinel; only entries whose value
/// differs from this participate in matching.
pub const NO_PREFERENCE: &str = "Any";

/// Maximum number of recommendations returned.
pub const TOP_K: usize = 5;

/// An ordered set of attribute preferences.
///
/// Entries keep insertion order, which is the order preference values are
/// joined into the query text. Keys are typed [`Attribute`]s, so an unknown
/// attribute name fails when parsed, before any matching runs.
#[derive(Debug, Clone, Default)]
pub struct Preferences {
    entries: Vec<(Attribute, String)>,
}

impl Preferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preferred value for an attribute.
    ///
    /// Setting an attribute twice replaces its value in place.
    pub fn set(&mut self, attribute: Attribute, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(a, _)| *a == attribute) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((attribute, value)),
        }
    }

    #[must_use]
    pub fn get(&self, attribute: Attribute) -> Option<&str> {
        self.entries
            .iter()
            .find(|(a, _)| *a == attribute)
            .map(|(_, v)| v.as_str())
    }

    /// All entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &str)> {
        self.entries.iter().map(|(a, v)| (*a, v.as_str()))
    }

    /// The stated entries: everything not set to [`NO_PREFERENCE`].
    pub fn stated(&self) -> impl Iterator<Item = (Attribute, &str)> {
        self.iter().filter(|(_, value)| *value != NO_PREFERENCE)
    }

    /// Query text for the vector space: stated values joined by spaces.
    ///
    /// All-[`NO_PREFERENCE`] input yields the empty string, which projects to
    /// the zero vector.
    #[must_use]
    pub fn query_text(&self) -> String {
        self.stated()
            .map(|(_, value)| value)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Attribute, String)> for Preferences {
    fn from_iter<I: IntoIterator<Item = (Attribute, String)>>(iter: I) -> Self {
        let mut preferences = Preferences::new();
        for (attribute, value) in iter {
            preferences.set(attribute, value);
        }
        preferences
    }
}

/// A recommended item with its matched attributes as justification.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Item identifier
    pub name: String,
    /// "attribute: value" entries shared with the stated preferences; never empty
    pub shared: Vec<String>,
    /// Cosine similarity of the item document to the preference query
    pub score: f32,
}

/// Response shape handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub result: Vec<Recommendation>,
}

impl RecommendResponse {
    #[must_use]
    pub fn new(result: Vec<Recommendation>) -> Self {
        Self { result }
    }
}

/// Re-rank cosine-scored items by attribute overlap with the preferences.
///
/// For every item, each stated preference that occurs as a substring of the
/// item's attribute text becomes one justification entry. Substring (not
/// whole-token) matching is deliberate: a single preference token matches
/// inside a multi-value cell like `"cow, goat"`. Items sharing no stated
/// attribute are discarded regardless of cosine score; survivors sort by
/// (overlap desc, cosine desc, catalog order) and the first [`TOP_K`] are
/// returned. Fewer eligible items return fewer results, never padding.
#[must_use]
pub fn match_preferences(
    preferences: &Preferences,
    items: &[Item],
    scores: &[(usize, f32)],
) -> Vec<Recommendation> {
    let mut matched: Vec<Recommendation> = Vec::new();

    for &(index, score) in scores {
        let item = &items[index];
        let shared: Vec<String> = preferences
            .stated()
            .filter_map(|(attribute, value)| {
                let text = item.normalized(attribute);
                text.contains(value)
                    .then(|| format!("{attribute}: {text}"))
            })
            .collect();

        if !shared.is_empty() {
            matched.push(Recommendation {
                name: item.name.clone(),
                shared,
                score,
            });
        }
    }

    // Stable sort: ties on both keys keep catalog order
    matched.sort_by(|a, b| {
        b.shared
            .len()
            .cmp(&a.shared.len())
            .then_with(|| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal))
    });
    matched.truncate(TOP_K);
    matched
}
