pub mod credential_category;
pub mod credential_status;
pub mod score_details;
pub mod source_record;
pub mod subject_kind;

pub use credential_category::{CredentialCategory, StatusRule, CATEGORIES};
pub use credential_status::CredentialStatus;
pub use score_details::{CredentialEvaluation, ScoreDetails};
pub use source_record::{CredentialPlan, CredentialScoreUpdate, SourceRecord, SubjectUpsertPlan};
pub use subject_kind::SubjectKind;
