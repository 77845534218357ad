//! Attribute grouping
//!
//! Partitions the catalog by the distinct values of one attribute. Works
//! directly off the catalog and bypasses the vector space entirely; each call
//! allocates its own transient table (a cheap catalog-sized scan).

use std::collections::BTreeMap;

use fromage_core::{Attribute, Item, Result, UNKNOWN};

/// Delimiter between the values of a multi-value attribute cell.
const VALUE_DELIMITER: &str = ", ";

/// Bucket item identifiers under every distinct value of one attribute.
///
/// Multi-value cells are split on `", "` and the item appears under every one
/// of its values. Missing values (the `"Unknown"` sentinel) never form a
/// bucket. Buckets hold identifiers in lexicographic order; the map itself is
/// value-ordered, so two calls over an unchanged catalog are identical.
///
/// Fails with [`fromage_core::Error::UnknownAttribute`] when the attribute
/// name is not one of the configured fields.
pub fn group_by(attribute_name: &str, items: &[Item]) -> Result<BTreeMap<String, Vec<String>>> {
    let attribute: Attribute = attribute_name.parse()?;

    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for item in items {
        for value in item.normalized(attribute).split(VALUE_DELIMITER) {
            let value = value.trim();
            if value.is_empty() || value == UNKNOWN {
                continue;
            }
            groups
                .entry(value.to_string())
                .or_default()
                .push(item.name.clone());
        }
    }

    for bucket in groups.values_mut() {
        bucket.sort();
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fromage_core::Error;

    fn catalog() -> Vec<Item> {
        vec![
            Item {
                name: "Abbaye".to_string(),
                milk: Some("cow, goat".to_string()),
                vegetarian: Some(true),
                ..Default::default()
            },
            Item {
                name: "Cheddar".to_string(),
                milk: Some("cow".to_string()),
                vegetarian: Some(false),
                ..Default::default()
            },
            Item {
                name: "Mystery".to_string(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_multi_value_cell_joins_every_bucket() {
        let groups = group_by("milk", &catalog()).unwrap();
        assert_eq!(groups["cow"], vec!["Abbaye", "Cheddar"]);
        assert_eq!(groups["goat"], vec!["Abbaye"]);
    }

    #[test]
    fn test_unknown_values_form_no_bucket() {
        let groups = group_by("milk", &catalog()).unwrap();
        assert!(!groups.contains_key(UNKNOWN));
        // The item with no milk value appears nowhere
        assert!(groups.values().all(|bucket| !bucket.contains(&"Mystery".to_string())));
    }

    #[test]
    fn test_boolean_attributes_group_by_rendered_value() {
        let groups = group_by("vegetarian", &catalog()).unwrap();
        assert_eq!(groups["True"], vec!["Abbaye"]);
        assert_eq!(groups["False"], vec!["Cheddar"]);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_buckets_are_sorted_lexicographically() {
        let mut items = catalog();
        items.reverse();
        let groups = group_by("milk", &items).unwrap();
        assert_eq!(groups["cow"], vec!["Abbaye", "Cheddar"]);
    }

    #[test]
    fn test_unknown_attribute_error() {
        let err = group_by("producer", &catalog()).unwrap_err();
        assert!(matches!(err, Error::UnknownAttribute(ref name) if name == "producer"));
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let items = catalog();
        assert_eq!(group_by("milk", &items).unwrap(), group_by("milk", &items).unwrap());
    }
}
