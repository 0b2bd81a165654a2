use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, DbEnum)]
#[ExistingTypePath = "crate::infrastructure::database::schema::sql_types::SubjectKind"]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    Doctor,
    Hospital,
}

impl SubjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectKind::Doctor => "doctor",
            SubjectKind::Hospital => "hospital",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
