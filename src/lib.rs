//! # fromage
//!
//! A content-based cheese recommender.
//!
//! fromage ranks a fixed catalog against free-text attribute preferences
//! using TF-IDF cosine similarity, re-ranked by literal attribute overlap
//! with human-readable justification, and can partition the catalog by the
//! distinct values of any configured attribute.
//!
//! ## Quick Start
//!
//! ```rust
//! use fromage::prelude::*;
//!
//! // Build a catalog (ingestion from tabular storage is the caller's job)
//! let catalog = vec![
//!     Item {
//!         name: "Gorgonzola".to_string(),
//!         milk: Some("cow".to_string()),
//!         family: Some("Blue".to_string()),
//!         kind: Some("semi-soft".to_string()),
//!         texture: Some("creamy".to_string()),
//!         vegetarian: Some(false),
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
//! // Fit once at session start
//! let engine = Engine::new();
//! engine.initialize(catalog).unwrap();
//!
//! // Rank against preferences; "Any" states no preference
//! let mut preferences = Preferences::new();
//! preferences.set(Attribute::Milk, "cow");
//! preferences.set(Attribute::Type, "hard");
//! preferences.set(Attribute::Flavor, NO_PREFERENCE);
//! let recommendations = engine.recommend(&preferences).unwrap();
//! assert_eq!(recommendations[0].name, "Cheddar");
//!
//! // Partition the catalog by one attribute
//! let by_milk = engine.group("milk").unwrap();
//! assert_eq!(by_milk["cow"].len(), 2);
//! ```
//!
//! ## Crate Structure
//!
//! fromage is composed of two crates:
//!
//! - [`fromage-core`](https://docs.rs/fromage-core) - Catalog model, attribute
//!   normalization, document composition, TF-IDF vector space
//! - [`fromage-engine`](https://docs.rs/fromage-engine) - Similarity ranking,
//!   preference matching with justification, attribute grouping
//!
//! ## Features
//!
//! - **Fit once, read many**: the fitted vector space is read-only and safe
//!   to share across concurrent ranking requests; re-fitting is an atomic swap
//! - **Explainable results**: every recommendation carries the matched
//!   "attribute: value" pairs that justify it
//! - **Open-vocabulary tolerance**: query terms outside the fitted vocabulary
//!   are dropped silently rather than rejected

// Re-export core types
pub use fromage_core::{Attribute, Error, Item, Result, TfidfIndex, Vector, UNKNOWN};

// Re-export engine
pub use fromage_engine::{
    Engine, Preferences, Recommendation, RecommendResponse, NO_PREFERENCE, TOP_K,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Attribute, Engine, Error, Item, Preferences, Recommendation, RecommendResponse, Result,
        TfidfIndex, Vector, NO_PREFERENCE, TOP_K, UNKNOWN,
    };
}
