pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::services::{BatchResult, IngestQueue, IngestService, IngestWorker, RecordFailure};
pub use domain::entities::{CredentialEntry, InstitutionRank, ReferenceEntity, ReferenceKind, Subject};
pub use domain::repositories::{AssociationCounts, InstitutionRankRepository, SubjectRepository};
pub use domain::value_objects::{
    CredentialEvaluation, CredentialStatus, ScoreDetails, SourceRecord, SubjectKind,
};
pub use infrastructure::database::repositories::{
    InstitutionRankRepositoryImpl, SubjectRepositoryImpl,
};
pub use infrastructure::database::Database;
pub use shared::errors::{AppError, AppResult};
pub use shared::utils::init_logger;
