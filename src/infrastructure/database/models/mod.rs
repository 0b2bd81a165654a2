use crate::domain::value_objects::SubjectKind;
use crate::infrastructure::database::schema::{
    careers, credential_types, credentials, institution_ranks, specialties, subject_careers,
    subject_credential_types, subject_facilities, subject_specialties, subjects,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ================== SUBJECT MODELS ==================

/// DB row model (read)
#[derive(Queryable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = subjects)]
pub struct SubjectModel {
    pub id: String,
    pub kind: SubjectKind,
    pub name: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload (write)
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = subjects)]
pub struct NewSubject {
    pub id: String,
    pub kind: SubjectKind,
    pub name: String,
    pub image_url: Option<String>,
}

/// Update payload (write). Excludes `id`, `kind` and `created_at`.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = subjects)]
pub struct SubjectChangeset {
    pub name: String,
    pub image_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

// ================== REFERENCE-ENTITY MODELS ==================

#[derive(Queryable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = specialties)]
pub struct SpecialtyModel {
    pub id: Uuid,
    pub name: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = specialties)]
pub struct NewSpecialty {
    pub id: Uuid,
    pub name: String,
}

#[derive(Queryable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = careers)]
pub struct CareerModel {
    pub id: Uuid,
    pub name: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = careers)]
pub struct NewCareer {
    pub id: Uuid,
    pub name: String,
}

#[derive(Queryable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = credential_types)]
pub struct CredentialTypeModel {
    pub id: Uuid,
    pub name: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = credential_types)]
pub struct NewCredentialType {
    pub id: Uuid,
    pub name: String,
}

// ============= ASSOCIATION MODELS (join rows) =============

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = subject_specialties)]
pub struct NewSubjectSpecialty {
    pub subject_id: String,
    pub specialty_id: Uuid,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = subject_careers)]
pub struct NewSubjectCareer {
    pub subject_id: String,
    pub career_id: Uuid,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = subject_credential_types)]
pub struct NewSubjectCredentialType {
    pub subject_id: String,
    pub credential_type_id: Uuid,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = subject_facilities)]
pub struct NewSubjectFacility {
    pub subject_id: String,
    pub facility_id: String,
}

// ================== CREDENTIAL MODELS ==================

#[derive(Queryable, Identifiable, Associations, Debug, Clone, Serialize, Deserialize)]
#[diesel(belongs_to(SubjectModel, foreign_key = subject_id))]
#[diesel(table_name = credentials)]
pub struct CredentialModel {
    pub id: Uuid,
    pub subject_id: String,
    pub description: String,
    pub matched_keyword: Option<String>,
    pub score: Option<f64>,
    pub credential_type_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = credentials)]
pub struct NewCredential {
    pub id: Uuid,
    pub subject_id: String,
    pub description: String,
    pub matched_keyword: Option<String>,
    pub score: Option<f64>,
    pub credential_type_id: Option<Uuid>,
}

// ================== INSTITUTION-RANK MODELS ==================

#[derive(Queryable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = institution_ranks)]
pub struct InstitutionRankModel {
    pub id: Uuid,
    pub name: String,
    pub rank: i32,
    pub aliases: serde_json::Value,
}
