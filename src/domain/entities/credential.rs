use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One raw credential/license/degree description belonging to a subject.
///
/// `matched_keyword` and `score` are derived data: they are recomputed and
/// overwritten on every scoring pass, and stay `None` when the description
/// could not be classified or scored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CredentialEntry {
    pub id: Uuid,
    pub subject_id: String,
    pub description: String,
    pub matched_keyword: Option<String>,
    pub score: Option<f64>,
    pub credential_type_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
