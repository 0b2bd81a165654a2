use async_trait::async_trait;

use crate::domain::entities::{CredentialEntry, Subject};
use crate::domain::value_objects::{CredentialScoreUpdate, SubjectUpsertPlan};
use crate::shared::errors::AppResult;

/// Association row counts for one subject, used for observability and
/// idempotence checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssociationCounts {
    pub specialties: i64,
    pub careers: i64,
    pub credential_types: i64,
    pub facilities: i64,
}

#[async_trait]
pub trait SubjectRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Subject>>;

    /// Persist one record's whole graph (subject row, reference
    /// resolution, association links and scored credentials) as a single
    /// transaction. Either everything commits or nothing does.
    async fn upsert_graph(&self, plan: SubjectUpsertPlan) -> AppResult<Subject>;

    async fn credentials_for(&self, subject_id: &str) -> AppResult<Vec<CredentialEntry>>;

    /// Overwrite derived score fields on existing credential rows, in one
    /// transaction. Used by rescoring passes.
    async fn update_credential_scores(
        &self,
        subject_id: &str,
        updates: Vec<CredentialScoreUpdate>,
    ) -> AppResult<()>;

    async fn association_counts(&self, subject_id: &str) -> AppResult<AssociationCounts>;
}
