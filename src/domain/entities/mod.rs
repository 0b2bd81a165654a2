pub mod credential;
pub mod institution;
pub mod reference;
pub mod subject;

pub use credential::CredentialEntry;
pub use institution::InstitutionRank;
pub use reference::{ReferenceEntity, ReferenceKind};
pub use subject::Subject;
