use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{InstitutionRank, Subject};
use crate::domain::repositories::{InstitutionRankRepository, SubjectRepository};
use crate::domain::services::credential_scorer;
use crate::domain::value_objects::{
    CredentialPlan, CredentialScoreUpdate, SourceRecord, SubjectUpsertPlan,
};
use crate::shared::errors::AppResult;
use crate::shared::utils::{LogContext, Validator};

/// Drives the ingestion pipeline: classifies and scores credentials, builds
/// per-record upsert plans and hands them to the repository one transaction
/// at a time. The sole entry point for callers is [`run_batch`].
///
/// [`run_batch`]: IngestService::run_batch
pub struct IngestService {
    subject_repo: Arc<dyn SubjectRepository>,
    institution_repo: Arc<dyn InstitutionRankRepository>,
}

impl IngestService {
    pub fn new(
        subject_repo: Arc<dyn SubjectRepository>,
        institution_repo: Arc<dyn InstitutionRankRepository>,
    ) -> Self {
        Self {
            subject_repo,
            institution_repo,
        }
    }

    /// Process a whole batch of source records, strictly sequentially.
    ///
    /// One record's failure is caught between transactions and recorded in
    /// the result; the batch never aborts early. Only a total failure
    /// (the institution list cannot be loaded at all) escapes as an error.
    pub async fn run_batch(&self, records: Vec<SourceRecord>) -> AppResult<BatchResult> {
        let institutions = self.institution_repo.list_ranked().await?;

        let total = records.len();
        let mut succeeded = 0u32;
        let mut failed = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            LogContext::ingest_progress(index + 1, total, &record.subject_id);

            if let Err(e) = Validator::validate_record(&record) {
                failed.push(RecordFailure {
                    subject_id: record.subject_id.clone(),
                    reason: format!("Malformed record: {}", e),
                });
                continue;
            }

            match self.upsert_record(record, &institutions).await {
                Ok(_) => succeeded += 1,
                Err((subject_id, e)) => {
                    LogContext::error_with_context(&e, "Record upsert failed");
                    failed.push(RecordFailure {
                        subject_id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        LogContext::batch_summary(total as u32, succeeded, failed.len());

        Ok(BatchResult {
            total: u32::try_from(total).unwrap_or(u32::MAX),
            succeeded,
            failed,
        })
    }

    /// Upsert a single record: score its credentials, then persist the
    /// whole graph in one transaction.
    async fn upsert_record(
        &self,
        record: SourceRecord,
        institutions: &[InstitutionRank],
    ) -> Result<Subject, (String, crate::shared::errors::AppError)> {
        let subject_id = record.subject_id.clone();
        let plan = build_plan(record, institutions);

        self.subject_repo
            .upsert_graph(plan)
            .await
            .map_err(|e| (subject_id, e))
    }

    /// Recompute and overwrite the derived score fields of one subject's
    /// credentials against the current institution list.
    ///
    /// Rescoring after an institution-rank change is batch-triggered only;
    /// it never happens automatically when the list changes.
    pub async fn rescore_subject(&self, subject_id: &str) -> AppResult<usize> {
        let institutions = self.institution_repo.list_ranked().await?;
        let entries = self.subject_repo.credentials_for(subject_id).await?;

        let updates: Vec<CredentialScoreUpdate> = entries
            .iter()
            .map(|entry| {
                let evaluation = credential_scorer::evaluate(&entry.description, &institutions);
                CredentialScoreUpdate {
                    credential_id: entry.id,
                    matched_keyword: evaluation
                        .as_ref()
                        .map(|e| e.details.matched_keyword.clone()),
                    score: evaluation.as_ref().map(|e| e.final_score),
                }
            })
            .collect();

        let count = updates.len();
        self.subject_repo
            .update_credential_scores(subject_id, updates)
            .await?;
        Ok(count)
    }
}

/// Turn a source record into a persistence plan: trim and de-duplicate the
/// reference-entity names, and run the full scoring pass over every raw
/// credential description. Pure, so it is testable without a database.
pub fn build_plan(record: SourceRecord, institutions: &[InstitutionRank]) -> SubjectUpsertPlan {
    let credentials = record
        .credentials
        .iter()
        .map(|description| {
            let description = description.trim().to_string();
            match credential_scorer::evaluate(&description, institutions) {
                Some(evaluation) => CredentialPlan {
                    description,
                    credential_type: Some(evaluation.category),
                    matched_keyword: Some(evaluation.details.matched_keyword),
                    score: Some(evaluation.final_score),
                },
                // Unclassifiable or unscoreable: keep the raw text, null score
                None => CredentialPlan {
                    description,
                    credential_type: None,
                    matched_keyword: None,
                    score: None,
                },
            }
        })
        .collect();

    SubjectUpsertPlan {
        subject_id: record.subject_id.trim().to_string(),
        kind: record.kind,
        name: record.name.trim().to_string(),
        image_url: record.image_url,
        specialty_names: dedupe_names(&record.specialties),
        career_names: dedupe_names(&record.careers),
        credentials,
        facility_id: record.facility_id.map(|id| id.trim().to_string()),
    }
}

/// Trim and de-duplicate, preserving first-seen order. A record listing the
/// same specialty twice must still produce exactly one association.
fn dedupe_names(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            result.push(trimmed.to_string());
        }
    }
    result
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BatchResult {
    pub total: u32,
    pub succeeded: u32,
    pub failed: Vec<RecordFailure>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RecordFailure {
    pub subject_id: String,
    pub reason: String,
}
