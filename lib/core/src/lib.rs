//! # fromage Core
//!
//! Core library for the fromage recommender.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`Item`] - A catalog entry with its categorical and boolean attributes
//! - [`Attribute`] - The fixed, ordered set of configured attributes
//! - [`Vector`] - Dense term-weight vector with cosine operations
//! - [`TfidfIndex`] - Fitted TF-IDF vector space over the catalog
//!
//! ## Example
//!
//! ```rust
//! use fromage_core::{Item, TfidfIndex};
//!
//! let catalog = vec![
//!     Item {
//!         name: "Gorgonzola".to_string(),
//!         milk: Some("cow".to_string()),
//!         family: Some("Blue".to_string()),
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
//! // Compose one document per item and fit the vector space
//! let documents: Vec<String> = catalog.iter().map(Item::document).collect();
//! let index = TfidfIndex::fit(&documents).unwrap();
//!
//! // Project a preference query into the same space
//! let query = index.transform("cow hard");
//! let score = query.dot(&index.matrix()[1]);
//! assert!(score > 0.0);
//! ```

pub mod catalog;
pub mod error;
pub mod tfidf;
pub mod vector;

pub use catalog::{Attribute, Item, UNKNOWN};
pub use error::{Error, Result};
pub use tfidf::TfidfIndex;
pub use vector::Vector;
