use async_trait::async_trait;

use crate::domain::entities::InstitutionRank;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait InstitutionRankRepository: Send + Sync {
    /// The full institution list ordered by rank ascending (1 = best).
    async fn list_ranked(&self) -> AppResult<Vec<InstitutionRank>>;
}
