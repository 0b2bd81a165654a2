use crate::domain::entities::InstitutionRank;
use crate::domain::services::credential_classifier::classify;
use crate::domain::services::institution_matcher::{
    find_institution_token, institution_rank, weighted_score,
};
use crate::domain::value_objects::{
    CredentialCategory, CredentialEvaluation, CredentialStatus, ScoreDetails,
};

/// Score a classified credential.
///
/// Re-scans the lower-cased text for the first of the category's keywords
/// that appears (order is significant: "석박사" must be found before
/// "박사"/"석사" so compound degrees are not mis-scored as partial matches).
/// Returns `None` when no keyword is present or the keyword has no
/// base-score entry; the caller persists a null score, not an error.
pub fn score(
    text: &str,
    status: CredentialStatus,
    category: &CredentialCategory,
) -> Option<ScoreDetails> {
    let haystack = text.to_lowercase();

    let keyword = category
        .keywords
        .iter()
        .copied()
        .find(|keyword| haystack.contains(keyword))?;
    let base_score = category.base_score(keyword)?;

    let status_modifier = category.status_rule.modifier(status);

    Some(ScoreDetails {
        matched_keyword: keyword.to_string(),
        base_score,
        status_modifier,
        raw_score: base_score * status_modifier,
    })
}

/// Full classify → status → score → institution-weight pass over one raw
/// credential description.
///
/// This is the debug/tooling entry point ("why did this text get this
/// score") as well as what the ingest pipeline runs per credential; it needs
/// no database access. Institution weighting is applied here, on top of the
/// raw score, because it is a cross-cutting lookup shared by all credentials
/// of a subject.
pub fn evaluate(text: &str, institutions: &[InstitutionRank]) -> Option<CredentialEvaluation> {
    let category = classify(text)?;
    let status = CredentialStatus::detect(text);
    let details = score(text, status, category)?;

    let (rank, final_score) = match find_institution_token(text) {
        Some(token) => {
            let rank = institution_rank(&token, institutions);
            (Some(rank), weighted_score(details.raw_score, rank))
        }
        None => (None, details.raw_score),
    };

    Some(CredentialEvaluation {
        category: category.label.to_string(),
        status,
        details,
        institution_rank: rank,
        final_score,
    })
}
