//! Friend suggestions ranked by interest-tag similarity.
//!
//! A request runs eligibility filtering, builds one tag document per user
//! (requester first), weights them with TF-IDF over that pool only, and keeps
//! the candidates whose cosine similarity to the requester clears
//! [`SIMILARITY_THRESHOLD`], best first, at most [`MAX_SUGGESTIONS`].

pub mod corpus;
pub mod eligibility;
pub mod ranker;
pub mod store;
pub mod vectorizer;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

pub use store::{RelationshipStore, TaggedUser};

pub const SIMILARITY_THRESHOLD: f64 = 0.3;
pub const MAX_SUGGESTIONS: usize = 3;

/// What callers receive. The similarity score is internal to ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<TaggedUser> for Suggestion {
    fn from(user: TaggedUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

pub async fn get_suggestions<S: RelationshipStore>(
    store: &S,
    requester_id: &str,
) -> AppResult<Vec<Suggestion>> {
    let Some(requester) = store.find_user(requester_id).await? else {
        return Err(AppError::NotFound("User".into()));
    };

    let users = store.list_users().await?;
    let candidates = eligibility::eligible_candidates(store, &requester.id, users).await?;
    if candidates.is_empty() {
        debug!(requester_id, "no eligible candidates");
        return Ok(vec![]);
    }

    let pool_size = candidates.len();
    let suggestions: Vec<Suggestion> = rank_candidates(&requester, candidates)
        .into_iter()
        .map(|(user, _)| Suggestion::from(user))
        .collect();

    debug!(
        requester_id,
        pool_size,
        returned = suggestions.len(),
        "friend suggestions computed"
    );
    Ok(suggestions)
}

/// Scores `candidates` against `requester` and returns the kept ones with
/// their similarity, best first. An empty pool is never vectorized.
pub fn rank_candidates(
    requester: &TaggedUser,
    candidates: Vec<TaggedUser>,
) -> Vec<(TaggedUser, f64)> {
    if candidates.is_empty() {
        return vec![];
    }
    let documents = corpus::tag_documents(requester, &candidates);
    let vectors = vectorizer::vectorize(&documents);
    let Some((requester_vector, candidate_vectors)) = vectors.split_first() else {
        return vec![];
    };

    let scores: Vec<f64> = candidate_vectors
        .iter()
        .map(|v| ranker::cosine_similarity(requester_vector, v))
        .collect();

    let scored = candidates.into_iter().zip(scores).collect();
    ranker::top_matches(scored, SIMILARITY_THRESHOLD, MAX_SUGGESTIONS)
}

pub async fn dismiss_suggestion<S: RelationshipStore>(
    store: &S,
    requester_id: &str,
    target_id: &str,
) -> AppResult<()> {
    if store.find_user(requester_id).await?.is_none() {
        return Err(AppError::NotFound("User".into()));
    }
    if store.find_user(target_id).await?.is_none() {
        return Err(AppError::NotFound("User".into()));
    }
    if requester_id == target_id {
        return Err(AppError::BadRequest("Cannot dismiss yourself".into()));
    }

    store.record_dismissal(requester_id, target_id).await?;
    info!(requester_id, target_id, "suggestion dismissed");
    Ok(())
}
