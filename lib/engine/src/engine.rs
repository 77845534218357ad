//! Engine handle owning the fitted vector space
//!
//! Replaces module-level globals with an explicit fit-once, read-many handle.
//! [`Engine::initialize`] installs the fitted state with an atomic swap, so a
//! catalog refresh never serves a half-built index to in-flight readers.

use parking_lot::RwLock;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, warn};

use fromage_core::{Error, Item, Result, TfidfIndex};

use crate::group;
use crate::matcher::{self, Preferences, Recommendation};
use crate::rank;

/// The catalog and its vector space, built together and swapped together.
struct Fitted {
    items: Vec<Item>,
    index: TfidfIndex,
}

/// Shared recommendation engine.
///
/// Safe for concurrent reads once initialized. A failed fit leaves any
/// previously installed state untouched; a successful one replaces it whole.
#[derive(Default)]
pub struct Engine {
    fitted: RwLock<Option<Fitted>>,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fitted: RwLock::new(None),
        }
    }

    /// Fit the vector space over the catalog and install it.
    ///
    /// Called once at session start; calling it again is the explicit re-fit
    /// for a catalog refresh. There is no incremental update. Fails with
    /// [`Error::EmptyCorpus`] when no vocabulary can be formed.
    pub fn initialize(&self, items: Vec<Item>) -> Result<()> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.name.as_str()) {
                warn!(name = %item.name, "duplicate catalog identifier");
            }
        }

        let documents: Vec<String> = items.iter().map(Item::document).collect();
        let index = TfidfIndex::fit(&documents)?;
        info!(
            items = items.len(),
            vocabulary = index.vocabulary_size(),
            "vector space fitted"
        );

        *self.fitted.write() = Some(Fitted { items, index });
        Ok(())
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.fitted.read().is_some()
    }

    /// Number of catalog items, once initialized
    #[must_use]
    pub fn len(&self) -> usize {
        self.fitted
            .read()
            .as_ref()
            .map_or(0, |fitted| fitted.items.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rank the catalog against the stated preferences.
    ///
    /// Returns at most [`matcher::TOP_K`] recommendations, each carrying a
    /// non-empty justification list. All-`"Any"` preferences produce an empty
    /// list, which is a valid no-result outcome, not an error. Fails with
    /// [`Error::NotFitted`] before initialization.
    pub fn recommend(&self, preferences: &Preferences) -> Result<Vec<Recommendation>> {
        let guard = self.fitted.read();
        let fitted = guard.as_ref().ok_or(Error::NotFitted)?;

        let query = fitted.index.transform(&preferences.query_text());
        let scores = rank::rank(&query, fitted.index.matrix());
        let results = matcher::match_preferences(preferences, &fitted.items, &scores);
        debug!(
            stated = preferences.stated().count(),
            results = results.len(),
            "recommendation served"
        );
        Ok(results)
    }

    /// Bucket the catalog by the distinct values of one attribute.
    ///
    /// Fails with [`Error::NotFitted`] before initialization and with
    /// [`Error::UnknownAttribute`] for a name outside the configured set.
    pub fn group(&self, attribute_name: &str) -> Result<BTreeMap<String, Vec<String>>> {
        let guard = self.fitted.read();
        let fitted = guard.as_ref().ok_or(Error::NotFitted)?;

        let groups = group::group_by(attribute_name, &fitted.items)?;
        debug!(
            attribute = attribute_name,
            groups = groups.len(),
            "catalog grouped"
        );
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::NO_PREFERENCE;
    use fromage_core::Attribute;

    fn catalog() -> Vec<Item> {
        vec![
            Item {
                name: "A".to_string(),
                milk: Some("cow, goat".to_string()),
                kind: Some("semi-soft".to_string()),
                vegetarian: Some(true),
                ..Default::default()
            },
            Item {
                name: "B".to_string(),
                milk: Some("cow".to_string()),
                kind: Some("hard".to_string()),
                vegetarian: Some(false),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_recommend_before_initialize_fails() {
        let engine = Engine::new();
        let preferences = Preferences::new();
        assert!(matches!(
            engine.recommend(&preferences),
            Err(Error::NotFitted)
        ));
        assert!(matches!(engine.group("milk"), Err(Error::NotFitted)));
    }

    #[test]
    fn test_initialize_then_recommend() {
        let engine = Engine::new();
        engine.initialize(catalog()).unwrap();
        assert!(engine.is_initialized());
        assert_eq!(engine.len(), 2);

        let mut preferences = Preferences::new();
        preferences.set(Attribute::Milk, "cow");
        preferences.set(Attribute::Type, NO_PREFERENCE);
        preferences.set(Attribute::Vegetarian, NO_PREFERENCE);

        let results = engine.recommend(&preferences).unwrap();
        assert_eq!(results.len(), 2);
        for recommendation in &results {
            assert_eq!(recommendation.shared.len(), 1);
            assert!(recommendation.shared[0].starts_with("milk: cow"));
        }
    }

    #[test]
    fn test_empty_catalog_fit_fails_and_installs_nothing() {
        let engine = Engine::new();
        assert!(matches!(
            engine.initialize(Vec::new()),
            Err(Error::EmptyCorpus)
        ));
        assert!(!engine.is_initialized());
    }

    #[test]
    fn test_reinitialize_swaps_catalog() {
        let engine = Engine::new();
        engine.initialize(catalog()).unwrap();

        let refreshed = vec![Item {
            name: "C".to_string(),
            milk: Some("sheep".to_string()),
            ..Default::default()
        }];
        engine.initialize(refreshed).unwrap();
        assert_eq!(engine.len(), 1);

        let groups = engine.group("milk").unwrap();
        assert_eq!(groups["sheep"], vec!["C"]);
        assert!(!groups.contains_key("cow"));
    }

    #[test]
    fn test_group_unknown_attribute() {
        let engine = Engine::new();
        engine.initialize(catalog()).unwrap();
        assert!(matches!(
            engine.group("url"),
            Err(Error::UnknownAttribute(_))
        ));
    }
}
