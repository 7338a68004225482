use super::store::TaggedUser;

/// Tag documents for one suggestion request: the requester's tags first,
/// then each candidate's tags in candidate order.
pub fn tag_documents<'a>(requester: &'a TaggedUser, candidates: &'a [TaggedUser]) -> Vec<&'a [String]> {
    std::iter::once(requester.tags.as_slice())
        .chain(candidates.iter().map(|c| c.tags.as_slice()))
        .collect()
}
