use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::subject_kind::SubjectKind;

/// One already-extracted record from an external directory site.
///
/// Produced by the scraping collaborator; this crate only consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Externally-assigned stable id, not auto-generated.
    pub subject_id: String,
    pub kind: SubjectKind,
    pub name: String,
    pub image_url: Option<String>,
    pub specialties: Vec<String>,
    pub careers: Vec<String>,
    /// Raw credential descriptions, e.g. "서울대학교 의과대학 졸업".
    pub credentials: Vec<String>,
    /// Facility (hospital) this subject belongs to, if any.
    pub facility_id: Option<String>,
}

/// Everything the persistence layer needs to upsert one record in a single
/// transaction. Built by the ingest service from a [`SourceRecord`] with all
/// scoring already computed, so the repository stays a pure write path.
#[derive(Debug, Clone)]
pub struct SubjectUpsertPlan {
    pub subject_id: String,
    pub kind: SubjectKind,
    pub name: String,
    pub image_url: Option<String>,
    /// Trimmed and de-duplicated, original order preserved.
    pub specialty_names: Vec<String>,
    pub career_names: Vec<String>,
    pub credentials: Vec<CredentialPlan>,
    pub facility_id: Option<String>,
}

/// One credential ready for persistence. `credential_type`, keyword and
/// score are `None` when classification or scoring failed; the raw
/// description is still stored.
#[derive(Debug, Clone)]
pub struct CredentialPlan {
    pub description: String,
    pub credential_type: Option<String>,
    pub matched_keyword: Option<String>,
    pub score: Option<f64>,
}

/// Score overwrite for an existing credential row, used by rescoring.
#[derive(Debug, Clone)]
pub struct CredentialScoreUpdate {
    pub credential_id: Uuid,
    pub matched_keyword: Option<String>,
    pub score: Option<f64>,
}
