//! # fromage Engine
//!
//! Content-based recommendation engine on top of `fromage-core`.
//!
//! The engine ranks catalog items against a set of attribute preferences and
//! explains every result, and independently partitions the catalog by the
//! distinct values of one attribute.
//!
//! ## Features
//!
//! - **Similarity Ranking**: cosine scores over the fitted TF-IDF space
//! - **Preference Matching**: attribute-overlap re-ranking with cosine tie-break
//! - **Justification**: per-result "attribute: value" match explanations
//! - **Attribute Grouping**: multi-value-aware catalog partitioning
//!
//! ## Example
//!
//! ```rust
//! use fromage_engine::{Engine, Preferences, NO_PREFERENCE};
//! use fromage_core::{Attribute, Item};
//!
//! let catalog = vec![
//!     Item {
//!         name: "Gorgonzola".to_string(),
//!         milk: Some("cow".to_string()),
//!         family: Some("Blue".to_string()),
//!         kind: Some("semi-soft".to_string()),
//!         ..Default::default()
//!     },
//!     Item {
//!         name: "Cheddar".to_string(),
//!         milk: Some("cow".to_string()),
//!         kind: Some("hard".to_string()),
//!         ..Default::default()
//!     },
//! ];
//!
//! let engine = Engine::new();
//! engine.initialize(catalog).unwrap();
//!
//! let mut preferences = Preferences::new();
//! preferences.set(Attribute::Milk, "cow");
//! preferences.set(Attribute::Family, NO_PREFERENCE);
//!
//! let results = engine.recommend(&preferences).unwrap();
//! assert!(!results.is_empty());
//! assert_eq!(results[0].shared, vec!["milk: cow"]);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐     ┌────────────┐     ┌─────────────┐
//! │  Catalog  │────>│  TF-IDF    │────>│   Ranker    │
//! │  (items)  │     │  (fitted)  │     │  (cosine)   │
//! └───────────┘     └────────────┘     └─────────────┘
//!       │                                     │
//!       │            ┌────────────┐     ┌─────────────┐
//!       └───────────>│  Grouper   │     │   Matcher   │
//!                    │ (buckets)  │     │ (justified) │
//!                    └────────────┘     └─────────────┘
//! ```

pub mod engine;
pub mod group;
pub mod matcher;
pub mod rank;

// Re-export main types for convenience
pub use engine::Engine;
pub use group::group_by;
pub use matcher::{
    match_preferences, Preferences, Recommendation, RecommendResponse, NO_PREFERENCE, TOP_K,
};
pub use rank::rank;
