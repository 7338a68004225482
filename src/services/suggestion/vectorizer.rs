//! TF-IDF weighting of tag lists.
//!
//! Each user's tags form one document and each tag is one term. The
//! vocabulary and document frequencies come only from the documents passed
//! in, so weights are relative to the current candidate pool.

use std::collections::BTreeMap;

/// Sparse unit-length term weights. Ordered so that dot products are summed
/// in a fixed term order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagVector {
    weights: BTreeMap<String, f64>,
}

impl TagVector {
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &TagVector) -> f64 {
        self.weights
            .iter()
            .map(|(term, w)| w * other.weight(term))
            .sum()
    }
}

/// Tags compare case-insensitively and ignore surrounding whitespace.
pub fn normalize_term(tag: &str) -> Option<String> {
    let tag = tag.trim();
    if tag.is_empty() {
        return None;
    }
    Some(tag.to_lowercase())
}

/// One vector per document, in input order.
pub fn vectorize<D: AsRef<[String]>>(documents: &[D]) -> Vec<TagVector> {
    let term_counts: Vec<BTreeMap<String, usize>> = documents
        .iter()
        .map(|doc| {
            let mut counts = BTreeMap::new();
            for term in doc.as_ref().iter().filter_map(|t| normalize_term(t)) {
                *counts.entry(term).or_insert(0) += 1;
            }
            counts
        })
        .collect();

    let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
    for counts in &term_counts {
        for term in counts.keys() {
            *document_frequency.entry(term.as_str()).or_insert(0) += 1;
        }
    }

    let n = documents.len() as f64;
    let idf = |term: &str| -> f64 {
        let df = document_frequency.get(term).copied().unwrap_or(0) as f64;
        ((1.0 + n) / (1.0 + df)).ln() + 1.0
    };

    term_counts
        .iter()
        .map(|counts| {
            let mut weights: BTreeMap<String, f64> = counts
                .iter()
                .map(|(term, &tf)| (term.clone(), tf as f64 * idf(term.as_str())))
                .collect();

            let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for w in weights.values_mut() {
                    *w /= norm;
                }
            }
            TagVector { weights }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn vectors_are_unit_length() {
        let vectors = vectorize(&[doc(&["rust", "hiking"]), doc(&["rust", "cooking", "chess"])]);
        for v in &vectors {
            assert!((v.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn rarer_terms_weigh_more() {
        // "rust" is in every document, "hiking" only in the first.
        let vectors = vectorize(&[
            doc(&["rust", "hiking"]),
            doc(&["rust"]),
            doc(&["rust", "chess"]),
        ]);
        assert!(vectors[0].weight("hiking") > vectors[0].weight("rust"));
    }

    #[test]
    fn duplicate_tags_raise_term_frequency() {
        let vectors = vectorize(&[doc(&["rust", "rust", "go"]), doc(&["rust", "go"])]);
        let ratio = vectors[0].weight("rust") / vectors[0].weight("go");
        assert!((ratio - 2.0).abs() < 1e-12);
    }

    #[test]
    fn terms_are_trimmed_and_lowercased() {
        let vectors = vectorize(&[doc(&[" Rust ", "", "   "]), doc(&["rust"])]);
        assert_eq!(vectors[0].len(), 1);
        assert_eq!(vectors[0], vectors[1]);
    }

    #[test]
    fn empty_documents_are_zero_vectors() {
        let vectors = vectorize(&[doc(&[]), doc(&[])]);
        assert_eq!(vectors.len(), 2);
        assert!(vectors.iter().all(|v| v.is_empty() && v.norm() == 0.0));
    }

    #[test]
    fn no_documents_no_vectors() {
        let empty: Vec<Vec<String>> = vec![];
        assert!(vectorize(&empty).is_empty());
    }

    #[test]
    fn smoothed_idf_matches_hand_computation() {
        // n = 3, df(rust) = 3, df(hiking) = 2.
        let vectors = vectorize(&[
            doc(&["rust", "hiking"]),
            doc(&["rust"]),
            doc(&["rust", "hiking", "cooking"]),
        ]);
        let rust = 1.0_f64;
        let hiking = (4.0_f64 / 3.0).ln() + 1.0;
        let norm = (rust * rust + hiking * hiking).sqrt();
        assert!((vectors[0].weight("rust") - rust / norm).abs() < 1e-12);
        assert!((vectors[0].weight("hiking") - hiking / norm).abs() < 1e-12);
        assert_eq!(vectors[0].weight("cooking"), 0.0);
    }
}
