//! Catalog data model
//!
//! Defines the fixed set of item attributes, the raw catalog entry, and the
//! normalized view used to compose one text document per item. The attribute
//! set and its order are fixed for the lifetime of a fitted vector space;
//! unknown attribute names are a configuration error, surfaced when a name is
//! parsed rather than deep inside a lookup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Sentinel standing in for a missing or empty attribute value.
///
/// Distinct from every real attribute value and from the no-preference
/// sentinel used in queries.
pub const UNKNOWN: &str = "Unknown";

/// Literal missing marker carried by the raw dataset.
const MISSING_MARKER: &str = "NA";

/// One of the configured item attributes.
///
/// The variant order is the document composition order: the ten categorical
/// attributes first, then the two boolean ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Milk,
    Country,
    Region,
    Family,
    Type,
    Texture,
    Rind,
    Color,
    Flavor,
    Aroma,
    Vegetarian,
    Vegan,
}

impl Attribute {
    /// All configured attributes, in composition order.
    pub const ALL: [Attribute; 12] = [
        Attribute::Milk,
        Attribute::Country,
        Attribute::Region,
        Attribute::Family,
        Attribute::Type,
        Attribute::Texture,
        Attribute::Rind,
        Attribute::Color,
        Attribute::Flavor,
        Attribute::Aroma,
        Attribute::Vegetarian,
        Attribute::Vegan,
    ];

    /// The categorical attributes, in composition order.
    pub const CATEGORICAL: [Attribute; 10] = [
        Attribute::Milk,
        Attribute::Country,
        Attribute::Region,
        Attribute::Family,
        Attribute::Type,
        Attribute::Texture,
        Attribute::Rind,
        Attribute::Color,
        Attribute::Flavor,
        Attribute::Aroma,
    ];

    /// The attribute's column name in the catalog.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Milk => "milk",
            Attribute::Country => "country",
            Attribute::Region => "region",
            Attribute::Family => "family",
            Attribute::Type => "type",
            Attribute::Texture => "texture",
            Attribute::Rind => "rind",
            Attribute::Color => "color",
            Attribute::Flavor => "flavor",
            Attribute::Aroma => "aroma",
            Attribute::Vegetarian => "vegetarian",
            Attribute::Vegan => "vegan",
        }
    }

    /// Whether the attribute holds a tri-state boolean rather than text.
    #[must_use]
    pub fn is_boolean(self) -> bool {
        matches!(self, Attribute::Vegetarian | Attribute::Vegan)
    }
}

impl FromStr for Attribute {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Attribute::ALL
            .into_iter()
            .find(|attribute| attribute.name() == s)
            .ok_or_else(|| Error::UnknownAttribute(s.to_string()))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One catalog entry.
///
/// `name` is the stable identifier, unique within a catalog. Categorical
/// fields hold a single token, a comma-separated multi-value string, or
/// nothing; the boolean fields are tri-state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub milk: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub family: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub texture: Option<String>,
    pub rind: Option<String>,
    pub color: Option<String>,
    pub flavor: Option<String>,
    pub aroma: Option<String>,
    pub vegetarian: Option<bool>,
    pub vegan: Option<bool>,
}

impl Item {
    /// Raw text of one attribute, if present.
    ///
    /// Boolean attributes render to their canonical string form.
    #[must_use]
    pub fn raw(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::Milk => self.milk.as_deref(),
            Attribute::Country => self.country.as_deref(),
            Attribute::Region => self.region.as_deref(),
            Attribute::Family => self.family.as_deref(),
            Attribute::Type => self.kind.as_deref(),
            Attribute::Texture => self.texture.as_deref(),
            Attribute::Rind => self.rind.as_deref(),
            Attribute::Color => self.color.as_deref(),
            Attribute::Flavor => self.flavor.as_deref(),
            Attribute::Aroma => self.aroma.as_deref(),
            Attribute::Vegetarian => self.vegetarian.map(bool_str),
            Attribute::Vegan => self.vegan.map(bool_str),
        }
    }

    /// Normalized view of one attribute.
    ///
    /// Missing, empty and literal `"NA"` values collapse to [`UNKNOWN`];
    /// everything else passes through untouched, multi-value cells included.
    #[must_use]
    pub fn normalized(&self, attribute: Attribute) -> &str {
        match self.raw(attribute) {
            Some(value) if !value.is_empty() && value != MISSING_MARKER => value,
            _ => UNKNOWN,
        }
    }

    /// Compose the item's document: the normalized categorical fields in
    /// fixed order, followed by the rendered boolean fields.
    ///
    /// Pure function of the item; identical input always yields identical
    /// text, positionally aligned 1:1 with rows of the fitted matrix.
    #[must_use]
    pub fn document(&self) -> String {
        let mut parts: Vec<&str> = Attribute::CATEGORICAL
            .iter()
            .map(|&attribute| self.normalized(attribute))
            .collect();
        parts.push(self.normalized(Attribute::Vegetarian));
        parts.push(self.normalized(Attribute::Vegan));
        parts.join(" ")
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
