//! Cosine similarity ranking
//!
//! A pure numeric primitive: scores the query against every item vector and
//! leaves sorting and selection to the preference matcher.

use fromage_core::Vector;

/// Score every row of the fitted matrix against the query vector.
///
/// Returns one `(item_index, score)` pair per row, preserving positional
/// order. Rows and queries are L2-normalized by the vector space, so cosine
/// similarity reduces to the dot product; a zero query vector scores 0.0
/// against everything.
#[must_use]
pub fn rank(query: &Vector, matrix: &[Vector]) -> Vec<(usize, f32)> {
    matrix
        .iter()
        .enumerate()
        .map(|(index, row)| (index, query.dot(row)))
        .collect()
}
