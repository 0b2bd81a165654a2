use serde::{Deserialize, Serialize};

use super::credential_status::CredentialStatus;

/// Breakdown of a single credential score.
///
/// All four fields are preserved so a human can explain why a credential
/// received a given score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub matched_keyword: String,
    pub base_score: f64,
    pub status_modifier: f64,
    pub raw_score: f64,
}

/// Full audit trail for one evaluated credential, including the
/// institution-rank weighting applied on top of the raw score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialEvaluation {
    pub category: String,
    pub status: CredentialStatus,
    pub details: ScoreDetails,
    /// Rank used for weighting; `None` when the text carried no
    /// institution-looking token and the raw score was used unmodified.
    pub institution_rank: Option<i64>,
    pub final_score: f64,
}
