use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The three structurally identical reference-entity dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    Specialty,
    Career,
    CredentialType,
}

impl ReferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Specialty => "specialty",
            ReferenceKind::Career => "career",
            ReferenceKind::CredentialType => "credential_type",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A shared, deduplicated dimension row (specialty, career or credential
/// type) referenced by many subjects. `name` is unique per kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceEntity {
    pub id: Uuid,
    pub kind: ReferenceKind,
    pub name: String,
}

impl ReferenceEntity {
    pub fn new(kind: ReferenceKind, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            name,
        }
    }
}

impl fmt::Display for ReferenceEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
