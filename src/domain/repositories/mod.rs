pub mod institution_rank_repository;
pub mod subject_repository;

pub use institution_rank_repository::InstitutionRankRepository;
pub use subject_repository::{AssociationCounts, SubjectRepository};
