use std::cmp::Ordering;

use super::vectorizer::TagVector;

/// Cosine similarity; 0 when either vector has no magnitude.
pub fn cosine_similarity(a: &TagVector, b: &TagVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Keeps entries scoring at least `threshold`, best first, at most `cap`.
/// Equal scores keep their input order.
pub fn top_matches<T>(scored: Vec<(T, f64)>, threshold: f64, cap: usize) -> Vec<(T, f64)> {
    let mut kept: Vec<(T, f64)> = scored
        .into_iter()
        .filter(|(_, score)| *score >= threshold)
        .collect();

    // `sort_by` is stable.
    kept.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    kept.truncate(cap);
    kept
}
