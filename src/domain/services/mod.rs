pub mod credential_classifier;
pub mod credential_scorer;
pub mod institution_matcher;

pub use credential_classifier::classify;
pub use credential_scorer::{evaluate, score};
pub use institution_matcher::{find_institution_token, institution_rank, weighted_score};
