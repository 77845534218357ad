// TF-IDF vector space over the catalog documents
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::vector::Vector;

/// A fitted TF-IDF vector space.
///
/// Construction is the fit: a value of this type always owns a vocabulary,
/// smoothed IDF weights and the L2-normalized item-by-term matrix, so a
/// transform can never run against an unfitted space. The fit covers one
/// catalog snapshot; a catalog change invalidates it and requires a full
/// [`TfidfIndex::fit`] rebuild (no incremental update).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfIndex {
    // term -> column index
    vocabulary: HashMap<String, usize>,
    // column index -> smoothed inverse document frequency
    idf: Vec<f32>,
    // one L2-normalized row per document, in input order
    matrix: Vec<Vector>,
}

impl TfidfIndex {
    /// Tokenize text for indexing
    /// Uses lowercase normalization, splits on whitespace and punctuation,
    /// and drops single-character tokens
    #[inline]
    pub fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
            .map(|s| s.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
            .filter(|s| s.len() > 1)
            .collect()
    }

    /// Fit the vector space over an ordered sequence of documents.
    ///
    /// IDF uses the smoothed form `ln((1 + N) / (1 + df)) + 1`; each row is
    /// term-frequency times IDF, L2-normalized. Fails with
    /// [`Error::EmptyCorpus`] when no vocabulary can be formed.
    pub fn fit(documents: &[String]) -> Result<Self> {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| Self::tokenize(doc))
            .collect();

        // Assign columns in first-encounter order and count document frequencies
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_freqs: Vec<u32> = Vec::new();
        for tokens in &tokenized {
            let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in distinct {
                let next_column = vocabulary.len();
                let column = *vocabulary.entry(term.to_string()).or_insert(next_column);
                if column == document_freqs.len() {
                    document_freqs.push(0);
                }
                document_freqs[column] += 1;
            }
        }

        if vocabulary.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let total_docs = documents.len() as f32;
        let idf: Vec<f32> = document_freqs
            .iter()
            .map(|&df| ((1.0 + total_docs) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        let matrix = tokenized
            .iter()
            .map(|tokens| weigh(tokens, &vocabulary, &idf))
            .collect();

        Ok(Self {
            vocabulary,
            idf,
            matrix,
        })
    }

    /// Project arbitrary text into the fitted space.
    ///
    /// Uses the same tokenization and the fitted IDF weights. Terms outside
    /// the vocabulary contribute nothing; text with no known terms projects
    /// to the zero vector.
    #[must_use]
    pub fn transform(&self, text: &str) -> Vector {
        weigh(&Self::tokenize(text), &self.vocabulary, &self.idf)
    }

    /// The fitted item-by-term matrix, rows aligned 1:1 with the input documents
    #[inline]
    #[must_use]
    pub fn matrix(&self) -> &[Vector] {
        &self.matrix
    }

    #[inline]
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of fitted documents
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }
}

/// Weigh a token sequence against a vocabulary: tf * idf, L2-normalized
fn weigh(tokens: &[String], vocabulary: &HashMap<String, usize>, idf: &[f32]) -> Vector {
    let mut weights = vec![0.0f32; idf.len()];
    for token in tokens {
        if let Some(&column) = vocabulary.get(token) {
            weights[column] += idf[column];
        }
    }
    let mut vector = Vector::new(weights);
    vector.normalize();
    vector
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        vec![
            "cow italy blue creamy".to_string(),
            "goat france fresh creamy".to_string(),
            "cow england hard sharp".to_string(),
        ]
    }

    #[test]
    fn test_fit_builds_vocabulary() {
        let index = TfidfIndex::fit(&corpus()).unwrap();
        assert_eq!(index.len(), 3);
        // 10 distinct terms across the corpus
        assert_eq!(index.vocabulary_size(), 10);
    }

    #[test]
    fn test_rows_are_normalized() {
        let index = TfidfIndex::fit(&corpus()).unwrap();
        for row in index.matrix() {
            assert!((row.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_empty_corpus_error() {
        assert!(matches!(TfidfIndex::fit(&[]), Err(Error::EmptyCorpus)));

        let blank = vec![String::new(), String::new()];
        assert!(matches!(TfidfIndex::fit(&blank), Err(Error::EmptyCorpus)));
    }

    #[test]
    fn test_transform_matches_fitted_row() {
        let docs = corpus();
        let index = TfidfIndex::fit(&docs).unwrap();
        let projected = index.transform(&docs[0]);
        assert_eq!(projected, index.matrix()[0]);
    }

    #[test]
    fn test_unknown_terms_are_dropped() {
        let index = TfidfIndex::fit(&corpus()).unwrap();
        let vector = index.transform("volcanic moon cheese");
        assert_eq!(vector.norm(), 0.0);

        // Known terms still contribute alongside unknown ones
        let mixed = index.transform("volcanic cow");
        assert!(mixed.norm() > 0.0);
    }

    #[test]
    fn test_rare_terms_weigh_more() {
        let index = TfidfIndex::fit(&corpus()).unwrap();
        // "cow" appears in two documents, "italy" in one; against the first
        // document, the rarer term should pull the cosine higher
        let row = &index.matrix()[0];
        let common = index.transform("cow");
        let rare = index.transform("italy");
        assert!(rare.cosine_similarity(row) > common.cosine_similarity(row));
    }

    #[test]
    fn test_similarity_stays_in_unit_range() {
        let index = TfidfIndex::fit(&corpus()).unwrap();
        let query = index.transform("cow creamy blue");
        for row in index.matrix() {
            let score = query.dot(row);
            assert!((0.0..=1.0 + 1e-6).contains(&score));
        }
    }

    #[test]
    fn test_tokenize_drops_single_chars() {
        let tokens = TfidfIndex::tokenize("semi-soft, A cow's milk");
        assert_eq!(tokens, vec!["semi", "soft", "cow", "milk"]);
    }
}
