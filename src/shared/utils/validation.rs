use regex::Regex;

use crate::domain::value_objects::SourceRecord;
use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_subject_id(id: &str) -> Result<(), AppError> {
        if id.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Subject id cannot be empty".to_string(),
            ));
        }
        if id.len() > 64 {
            return Err(AppError::ValidationError(
                "Subject id too long (max 64 characters)".to_string(),
            ));
        }

        // External ids are slugs or numbers assigned by the directory site
        let re = Regex::new(r"^[a-zA-Z0-9._\-]+$").unwrap();
        if !re.is_match(id.trim()) {
            return Err(AppError::ValidationError(
                "Subject id contains invalid characters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_subject_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Subject name cannot be empty".to_string(),
            ));
        }
        if name.len() > 255 {
            return Err(AppError::ValidationError(
                "Subject name too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    /// Reject malformed records before they reach the upsert pipeline
    pub fn validate_record(record: &SourceRecord) -> Result<(), AppError> {
        Self::validate_subject_id(&record.subject_id)?;
        Self::validate_subject_name(&record.name)?;
        if let Some(facility_id) = &record.facility_id {
            Self::validate_subject_id(facility_id)?;
        }
        Ok(())
    }
}
