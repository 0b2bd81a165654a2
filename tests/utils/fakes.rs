/// In-memory fakes for the repository traits.
///
/// They reproduce the persistence contracts that matter to the service
/// layer (find-or-create uniqueness, association pairs stored as sets,
/// credential replacement, per-record all-or-nothing failure) so batch
/// semantics can be tested without a database.
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use medigraph::domain::entities::{CredentialEntry, InstitutionRank, ReferenceKind, Subject};
use medigraph::domain::repositories::{
    AssociationCounts, InstitutionRankRepository, SubjectRepository,
};
use medigraph::domain::value_objects::{CredentialScoreUpdate, SubjectKind, SubjectUpsertPlan};
use medigraph::shared::errors::{AppError, AppResult};

#[derive(Default)]
struct SubjectStoreInner {
    subjects: HashMap<String, Subject>,
    references: HashMap<(ReferenceKind, String), Uuid>,
    specialty_links: HashSet<(String, Uuid)>,
    career_links: HashSet<(String, Uuid)>,
    credential_type_links: HashSet<(String, Uuid)>,
    facility_links: HashSet<(String, String)>,
    credentials: HashMap<String, Vec<CredentialEntry>>,
    fail_ids: HashSet<String>,
    upsert_calls: usize,
}

#[derive(Default)]
pub struct InMemorySubjectRepository {
    inner: Mutex<SubjectStoreInner>,
}

impl InMemorySubjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make upserts for this subject id fail, as a persistence error would.
    pub fn fail_on(&self, subject_id: &str) {
        self.inner
            .lock()
            .unwrap()
            .fail_ids
            .insert(subject_id.to_string());
    }

    pub fn subject_count(&self) -> usize {
        self.inner.lock().unwrap().subjects.len()
    }

    pub fn has_subject(&self, id: &str) -> bool {
        self.inner.lock().unwrap().subjects.contains_key(id)
    }

    pub fn reference_count(&self, kind: ReferenceKind) -> usize {
        self.inner
            .lock()
            .unwrap()
            .references
            .keys()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    pub fn upsert_calls(&self) -> usize {
        self.inner.lock().unwrap().upsert_calls
    }

    pub fn credential_scores(&self, subject_id: &str) -> Vec<Option<f64>> {
        self.inner
            .lock()
            .unwrap()
            .credentials
            .get(subject_id)
            .map(|entries| entries.iter().map(|e| e.score).collect())
            .unwrap_or_default()
    }
}

impl SubjectStoreInner {
    fn resolve(&mut self, kind: ReferenceKind, name: &str) -> Uuid {
        *self
            .references
            .entry((kind, name.to_string()))
            .or_insert_with(Uuid::new_v4)
    }

    fn ensure_subject(&mut self, id: &str, kind: SubjectKind, name: &str, image_url: Option<String>) {
        let now = Utc::now();
        self.subjects
            .entry(id.to_string())
            .and_modify(|subject| {
                subject.name = name.to_string();
                subject.image_url = image_url.clone();
                subject.updated_at = now;
            })
            .or_insert_with(|| Subject {
                id: id.to_string(),
                kind,
                name: name.to_string(),
                image_url,
                created_at: now,
                updated_at: now,
            });
    }
}

#[async_trait]
impl SubjectRepository for InMemorySubjectRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Subject>> {
        Ok(self.inner.lock().unwrap().subjects.get(id).cloned())
    }

    async fn upsert_graph(&self, plan: SubjectUpsertPlan) -> AppResult<Subject> {
        let mut inner = self.inner.lock().unwrap();
        inner.upsert_calls += 1;

        if inner.fail_ids.contains(&plan.subject_id) {
            return Err(AppError::DatabaseError(
                "simulated constraint violation".to_string(),
            ));
        }

        inner.ensure_subject(&plan.subject_id, plan.kind, &plan.name, plan.image_url.clone());

        for name in &plan.specialty_names {
            let id = inner.resolve(ReferenceKind::Specialty, name);
            inner.specialty_links.insert((plan.subject_id.clone(), id));
        }
        for name in &plan.career_names {
            let id = inner.resolve(ReferenceKind::Career, name);
            inner.career_links.insert((plan.subject_id.clone(), id));
        }

        let now = Utc::now();
        let mut entries = Vec::new();
        for credential in &plan.credentials {
            let credential_type_id = credential.credential_type.as_ref().map(|type_name| {
                let id = inner.resolve(ReferenceKind::CredentialType, type_name);
                inner
                    .credential_type_links
                    .insert((plan.subject_id.clone(), id));
                id
            });
            entries.push(CredentialEntry {
                id: Uuid::new_v4(),
                subject_id: plan.subject_id.clone(),
                description: credential.description.clone(),
                matched_keyword: credential.matched_keyword.clone(),
                score: credential.score,
                credential_type_id,
                created_at: now,
                updated_at: now,
            });
        }
        inner.credentials.insert(plan.subject_id.clone(), entries);

        if let Some(facility_id) = &plan.facility_id {
            let kind = SubjectKind::Hospital;
            if !inner.subjects.contains_key(facility_id) {
                inner.ensure_subject(facility_id, kind, facility_id, None);
            }
            inner
                .facility_links
                .insert((plan.subject_id.clone(), facility_id.clone()));
        }

        Ok(inner.subjects.get(&plan.subject_id).cloned().unwrap())
    }

    async fn credentials_for(&self, subject_id: &str) -> AppResult<Vec<CredentialEntry>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .credentials
            .get(subject_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn update_credential_scores(
        &self,
        subject_id: &str,
        updates: Vec<CredentialScoreUpdate>,
    ) -> AppResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let entries = inner.credentials.entry(subject_id.to_string()).or_default();
        for update in updates {
            if let Some(entry) = entries.iter_mut().find(|e| e.id == update.credential_id) {
                entry.matched_keyword = update.matched_keyword.clone();
                entry.score = update.score;
                entry.updated_at = Utc::now();
            }
        }
        Ok(())
    }

    async fn association_counts(&self, subject_id: &str) -> AppResult<AssociationCounts> {
        let inner = self.inner.lock().unwrap();
        Ok(AssociationCounts {
            specialties: inner
                .specialty_links
                .iter()
                .filter(|(id, _)| id == subject_id)
                .count() as i64,
            careers: inner
                .career_links
                .iter()
                .filter(|(id, _)| id == subject_id)
                .count() as i64,
            credential_types: inner
                .credential_type_links
                .iter()
                .filter(|(id, _)| id == subject_id)
                .count() as i64,
            facilities: inner
                .facility_links
                .iter()
                .filter(|(id, _)| id == subject_id)
                .count() as i64,
        })
    }
}

/// Institution list served from memory; replaceable to simulate a ranking
/// update between batch runs.
pub struct FixedInstitutionRanks {
    ranks: Mutex<Vec<InstitutionRank>>,
}

impl FixedInstitutionRanks {
    pub fn new(ranks: Vec<InstitutionRank>) -> Self {
        Self {
            ranks: Mutex::new(ranks),
        }
    }

    pub fn replace(&self, ranks: Vec<InstitutionRank>) {
        *self.ranks.lock().unwrap() = ranks;
    }
}

#[async_trait]
impl InstitutionRankRepository for FixedInstitutionRanks {
    async fn list_ranked(&self) -> AppResult<Vec<InstitutionRank>> {
        Ok(self.ranks.lock().unwrap().clone())
    }
}
