use std::collections::HashMap;

use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::entities::ReferenceKind;
use crate::infrastructure::database::models::{NewCareer, NewCredentialType, NewSpecialty};
use crate::infrastructure::database::schema::{
    careers, credential_types, specialties, subject_careers, subject_credential_types,
    subject_facilities, subject_specialties,
};
use crate::log_debug;
use crate::shared::errors::AppResult;

/// Find-or-create resolver for the three reference-entity dimensions.
///
/// Caches resolved ids for the duration of one unit of work so repeated
/// names inside a record hit the database once. The authoritative
/// uniqueness guarantee stays in the database: a UNIQUE constraint on
/// `name` plus `ON CONFLICT` upserts, with a find-by-name fallback.
pub struct ReferenceResolver {
    cache: HashMap<(ReferenceKind, String), Uuid>,
}

impl ReferenceResolver {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub fn resolve(
        &mut self,
        conn: &mut PgConnection,
        kind: ReferenceKind,
        raw_name: &str,
    ) -> AppResult<Uuid> {
        let name = raw_name.trim();
        let cache_key = (kind, name.to_string());

        if let Some(id) = self.cache.get(&cache_key) {
            return Ok(*id);
        }

        let id = match kind {
            ReferenceKind::Specialty => resolve_specialty(conn, name)?,
            ReferenceKind::Career => resolve_career(conn, name)?,
            ReferenceKind::CredentialType => resolve_credential_type(conn, name)?,
        };

        self.cache.insert(cache_key, id);
        Ok(id)
    }
}

impl Default for ReferenceResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_specialty(conn: &mut PgConnection, name: &str) -> AppResult<Uuid> {
    if let Some(id) = specialties::table
        .filter(specialties::name.eq(name))
        .select(specialties::id)
        .first::<Uuid>(conn)
        .optional()?
    {
        return Ok(id);
    }

    log_debug!("Creating specialty '{}'", name);
    let id = diesel::insert_into(specialties::table)
        .values(NewSpecialty {
            id: Uuid::new_v4(),
            name: name.to_string(),
        })
        .on_conflict(specialties::name)
        .do_update()
        .set(specialties::name.eq(name))
        .returning(specialties::id)
        .get_result::<Uuid>(conn)?;
    Ok(id)
}

fn resolve_career(conn: &mut PgConnection, name: &str) -> AppResult<Uuid> {
    if let Some(id) = careers::table
        .filter(careers::name.eq(name))
        .select(careers::id)
        .first::<Uuid>(conn)
        .optional()?
    {
        return Ok(id);
    }

    log_debug!("Creating career '{}'", name);
    let id = diesel::insert_into(careers::table)
        .values(NewCareer {
            id: Uuid::new_v4(),
            name: name.to_string(),
        })
        .on_conflict(careers::name)
        .do_update()
        .set(careers::name.eq(name))
        .returning(careers::id)
        .get_result::<Uuid>(conn)?;
    Ok(id)
}

fn resolve_credential_type(conn: &mut PgConnection, name: &str) -> AppResult<Uuid> {
    if let Some(id) = credential_types::table
        .filter(credential_types::name.eq(name))
        .select(credential_types::id)
        .first::<Uuid>(conn)
        .optional()?
    {
        return Ok(id);
    }

    log_debug!("Creating credential type '{}'", name);
    let id = diesel::insert_into(credential_types::table)
        .values(NewCredentialType {
            id: Uuid::new_v4(),
            name: name.to_string(),
        })
        .on_conflict(credential_types::name)
        .do_update()
        .set(credential_types::name.eq(name))
        .returning(credential_types::id)
        .get_result::<Uuid>(conn)?;
    Ok(id)
}

// -------------------------------------------------------------------------
// Relationship linking: existence check on the pair before insert, so
// re-processing the same source record never duplicates a join row.
// -------------------------------------------------------------------------

pub fn link_specialty(conn: &mut PgConnection, subject_id: &str, specialty_id: Uuid) -> AppResult<()> {
    let exists: bool = diesel::select(diesel::dsl::exists(
        subject_specialties::table
            .filter(subject_specialties::subject_id.eq(subject_id))
            .filter(subject_specialties::specialty_id.eq(specialty_id)),
    ))
    .get_result(conn)?;
    if exists {
        return Ok(());
    }

    diesel::insert_into(subject_specialties::table)
        .values((
            subject_specialties::subject_id.eq(subject_id),
            subject_specialties::specialty_id.eq(specialty_id),
        ))
        .on_conflict_do_nothing()
        .execute(conn)?;
    Ok(())
}

pub fn link_career(conn: &mut PgConnection, subject_id: &str, career_id: Uuid) -> AppResult<()> {
    let exists: bool = diesel::select(diesel::dsl::exists(
        subject_careers::table
            .filter(subject_careers::subject_id.eq(subject_id))
            .filter(subject_careers::career_id.eq(career_id)),
    ))
    .get_result(conn)?;
    if exists {
        return Ok(());
    }

    diesel::insert_into(subject_careers::table)
        .values((
            subject_careers::subject_id.eq(subject_id),
            subject_careers::career_id.eq(career_id),
        ))
        .on_conflict_do_nothing()
        .execute(conn)?;
    Ok(())
}

pub fn link_credential_type(
    conn: &mut PgConnection,
    subject_id: &str,
    credential_type_id: Uuid,
) -> AppResult<()> {
    let exists: bool = diesel::select(diesel::dsl::exists(
        subject_credential_types::table
            .filter(subject_credential_types::subject_id.eq(subject_id))
            .filter(subject_credential_types::credential_type_id.eq(credential_type_id)),
    ))
    .get_result(conn)?;
    if exists {
        return Ok(());
    }

    diesel::insert_into(subject_credential_types::table)
        .values((
            subject_credential_types::subject_id.eq(subject_id),
            subject_credential_types::credential_type_id.eq(credential_type_id),
        ))
        .on_conflict_do_nothing()
        .execute(conn)?;
    Ok(())
}

pub fn link_facility(conn: &mut PgConnection, subject_id: &str, facility_id: &str) -> AppResult<()> {
    let exists: bool = diesel::select(diesel::dsl::exists(
        subject_facilities::table
            .filter(subject_facilities::subject_id.eq(subject_id))
            .filter(subject_facilities::facility_id.eq(facility_id)),
    ))
    .get_result(conn)?;
    if exists {
        return Ok(());
    }

    diesel::insert_into(subject_facilities::table)
        .values((
            subject_facilities::subject_id.eq(subject_id),
            subject_facilities::facility_id.eq(facility_id),
        ))
        .on_conflict_do_nothing()
        .execute(conn)?;
    Ok(())
}
