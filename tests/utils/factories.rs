/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use medigraph::domain::entities::InstitutionRank;
use medigraph::domain::value_objects::{SourceRecord, SubjectKind};

pub struct SourceRecordFactory {
    record: SourceRecord,
}

impl SourceRecordFactory {
    pub fn doctor(id: &str, name: &str) -> Self {
        Self {
            record: SourceRecord {
                subject_id: id.to_string(),
                kind: SubjectKind::Doctor,
                name: name.to_string(),
                image_url: None,
                specialties: Vec::new(),
                careers: Vec::new(),
                credentials: Vec::new(),
                facility_id: None,
            },
        }
    }

    pub fn hospital(id: &str, name: &str) -> Self {
        Self {
            record: SourceRecord {
                subject_id: id.to_string(),
                kind: SubjectKind::Hospital,
                name: name.to_string(),
                image_url: None,
                specialties: Vec::new(),
                careers: Vec::new(),
                credentials: Vec::new(),
                facility_id: None,
            },
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.record.name = name.to_string();
        self
    }

    pub fn with_specialties(mut self, specialties: &[&str]) -> Self {
        self.record.specialties = specialties.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_careers(mut self, careers: &[&str]) -> Self {
        self.record.careers = careers.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_credentials(mut self, credentials: &[&str]) -> Self {
        self.record.credentials = credentials.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_facility(mut self, facility_id: &str) -> Self {
        self.record.facility_id = Some(facility_id.to_string());
        self
    }

    pub fn build(self) -> SourceRecord {
        self.record
    }
}

/// A small ranked university list matching real-world data shape.
pub fn korean_university_ranks() -> Vec<InstitutionRank> {
    vec![
        InstitutionRank::new("서울대학교", 1),
        InstitutionRank::new("연세대학교", 2).with_aliases(vec!["연세의대".to_string()]),
        InstitutionRank::new("고려대학교", 3),
    ]
}
