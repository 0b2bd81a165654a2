use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::domain::{
    entities::{CredentialEntry, ReferenceKind, Subject},
    repositories::{AssociationCounts, SubjectRepository},
    value_objects::{CredentialScoreUpdate, SubjectKind, SubjectUpsertPlan},
};
use crate::infrastructure::database::{
    connection::Database,
    models::*,
    repositories::reference_resolver::{
        link_career, link_credential_type, link_facility, link_specialty, ReferenceResolver,
    },
    schema::{
        credentials, subject_careers, subject_credential_types, subject_facilities,
        subject_specialties, subjects,
    },
};
use crate::log_debug;
use crate::shared::errors::{AppError, AppResult};

pub struct SubjectRepositoryImpl {
    db: Arc<Database>,
}

impl SubjectRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn model_to_entity(model: SubjectModel) -> Subject {
        Subject {
            id: model.id,
            kind: model.kind,
            name: model.name,
            image_url: model.image_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    fn credential_to_entity(model: CredentialModel) -> CredentialEntry {
        CredentialEntry {
            id: model.id,
            subject_id: model.subject_id,
            description: model.description,
            matched_keyword: model.matched_keyword,
            score: model.score,
            credential_type_id: model.credential_type_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    /// Find-or-update the subject row. Display fields are refreshed on
    /// every run; `id`, `kind` and `created_at` never change.
    fn upsert_subject_row(conn: &mut PgConnection, plan: &SubjectUpsertPlan) -> AppResult<SubjectModel> {
        let existing = subjects::table
            .filter(subjects::id.eq(&plan.subject_id))
            .first::<SubjectModel>(conn)
            .optional()?;

        let model = match existing {
            Some(_) => diesel::update(subjects::table.filter(subjects::id.eq(&plan.subject_id)))
                .set(SubjectChangeset {
                    name: plan.name.clone(),
                    image_url: plan.image_url.clone(),
                    updated_at: Utc::now(),
                })
                .get_result::<SubjectModel>(conn)?,
            None => diesel::insert_into(subjects::table)
                .values(NewSubject {
                    id: plan.subject_id.clone(),
                    kind: plan.kind,
                    name: plan.name.clone(),
                    image_url: plan.image_url.clone(),
                })
                .get_result::<SubjectModel>(conn)?,
        };

        Ok(model)
    }

    /// Make sure the facility row exists before linking to it. Records can
    /// arrive in any order, so an unseen facility gets a placeholder
    /// hospital row; its own record later updates the display fields.
    fn ensure_facility_row(conn: &mut PgConnection, facility_id: &str) -> AppResult<()> {
        let exists: bool = diesel::select(diesel::dsl::exists(
            subjects::table.filter(subjects::id.eq(facility_id)),
        ))
        .get_result(conn)?;
        if exists {
            return Ok(());
        }

        log_debug!("Creating placeholder facility '{}'", facility_id);
        diesel::insert_into(subjects::table)
            .values(NewSubject {
                id: facility_id.to_string(),
                kind: SubjectKind::Hospital,
                name: facility_id.to_string(),
                image_url: None,
            })
            .on_conflict_do_nothing()
            .execute(conn)?;
        Ok(())
    }

    /// The whole record as one unit of work. Runs inside a transaction:
    /// either every row for this record commits, or none of it does.
    fn upsert_graph_tx(conn: &mut PgConnection, plan: &SubjectUpsertPlan) -> AppResult<Subject> {
        let model = Self::upsert_subject_row(conn, plan)?;

        let mut resolver = ReferenceResolver::new();

        for name in &plan.specialty_names {
            let specialty_id = resolver.resolve(conn, ReferenceKind::Specialty, name)?;
            link_specialty(conn, &plan.subject_id, specialty_id)?;
        }

        for name in &plan.career_names {
            let career_id = resolver.resolve(conn, ReferenceKind::Career, name)?;
            link_career(conn, &plan.subject_id, career_id)?;
        }

        // Credential rows are derived from the scraped list wholesale:
        // replace them so re-runs converge instead of accumulating.
        diesel::delete(credentials::table.filter(credentials::subject_id.eq(&plan.subject_id)))
            .execute(conn)?;

        for credential in &plan.credentials {
            let credential_type_id = match &credential.credential_type {
                Some(type_name) => {
                    let id = resolver.resolve(conn, ReferenceKind::CredentialType, type_name)?;
                    link_credential_type(conn, &plan.subject_id, id)?;
                    Some(id)
                }
                None => None,
            };

            diesel::insert_into(credentials::table)
                .values(NewCredential {
                    id: Uuid::new_v4(),
                    subject_id: plan.subject_id.clone(),
                    description: credential.description.clone(),
                    matched_keyword: credential.matched_keyword.clone(),
                    score: credential.score,
                    credential_type_id,
                })
                .execute(conn)?;
        }

        if let Some(facility_id) = &plan.facility_id {
            Self::ensure_facility_row(conn, facility_id)?;
            link_facility(conn, &plan.subject_id, facility_id)?;
        }

        Ok(Self::model_to_entity(model))
    }
}

#[async_trait]
impl SubjectRepository for SubjectRepositoryImpl {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Subject>> {
        let db = Arc::clone(&self.db);
        let id = id.to_string();

        let model = task::spawn_blocking(move || -> AppResult<Option<SubjectModel>> {
            let mut conn = db.get_connection()?;
            let m = subjects::table
                .filter(subjects::id.eq(&id))
                .first::<SubjectModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Self::model_to_entity))
    }

    async fn upsert_graph(&self, plan: SubjectUpsertPlan) -> AppResult<Subject> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Subject> {
            let mut conn = db.get_connection()?;
            conn.transaction::<Subject, AppError, _>(|conn| Self::upsert_graph_tx(conn, &plan))
        })
        .await?
    }

    async fn credentials_for(&self, subject_id: &str) -> AppResult<Vec<CredentialEntry>> {
        let db = Arc::clone(&self.db);
        let subject_id = subject_id.to_string();

        let models = task::spawn_blocking(move || -> AppResult<Vec<CredentialModel>> {
            let mut conn = db.get_connection()?;
            let rows = credentials::table
                .filter(credentials::subject_id.eq(&subject_id))
                .order(credentials::created_at.asc())
                .load::<CredentialModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(Self::credential_to_entity).collect())
    }

    async fn update_credential_scores(
        &self,
        subject_id: &str,
        updates: Vec<CredentialScoreUpdate>,
    ) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let subject_id = subject_id.to_string();

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            conn.transaction::<(), AppError, _>(|conn| {
                for update in &updates {
                    diesel::update(
                        credentials::table
                            .filter(credentials::id.eq(update.credential_id))
                            .filter(credentials::subject_id.eq(&subject_id)),
                    )
                    .set((
                        credentials::matched_keyword.eq(&update.matched_keyword),
                        credentials::score.eq(update.score),
                        credentials::updated_at.eq(Utc::now()),
                    ))
                    .execute(conn)?;
                }
                Ok(())
            })
        })
        .await?
    }

    async fn association_counts(&self, subject_id: &str) -> AppResult<AssociationCounts> {
        let db = Arc::clone(&self.db);
        let subject_id = subject_id.to_string();

        task::spawn_blocking(move || -> AppResult<AssociationCounts> {
            let mut conn = db.get_connection()?;

            let specialties: i64 = subject_specialties::table
                .filter(subject_specialties::subject_id.eq(&subject_id))
                .count()
                .get_result(&mut conn)?;
            let careers: i64 = subject_careers::table
                .filter(subject_careers::subject_id.eq(&subject_id))
                .count()
                .get_result(&mut conn)?;
            let credential_types: i64 = subject_credential_types::table
                .filter(subject_credential_types::subject_id.eq(&subject_id))
                .count()
                .get_result(&mut conn)?;
            let facilities: i64 = subject_facilities::table
                .filter(subject_facilities::subject_id.eq(&subject_id))
                .count()
                .get_result(&mut conn)?;

            Ok(AssociationCounts {
                specialties,
                careers,
                credential_types,
                facilities,
            })
        })
        .await?
    }
}
