pub mod institution_rank_repository_impl;
pub mod reference_resolver;
pub mod subject_repository_impl;

pub use institution_rank_repository_impl::InstitutionRankRepositoryImpl;
pub use reference_resolver::ReferenceResolver;
pub use subject_repository_impl::SubjectRepositoryImpl;
