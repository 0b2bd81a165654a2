use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::domain::entities::InstitutionRank;
use crate::domain::repositories::InstitutionRankRepository;
use crate::infrastructure::database::{
    connection::Database, models::InstitutionRankModel, schema::institution_ranks,
};
use crate::shared::errors::AppResult;

pub struct InstitutionRankRepositoryImpl {
    db: Arc<Database>,
}

impl InstitutionRankRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn model_to_entity(model: InstitutionRankModel) -> InstitutionRank {
        InstitutionRank {
            id: model.id,
            name: model.name,
            rank: model.rank,
            aliases: serde_json::from_value::<Vec<String>>(model.aliases).unwrap_or_default(),
        }
    }
}

#[async_trait]
impl InstitutionRankRepository for InstitutionRankRepositoryImpl {
    async fn list_ranked(&self) -> AppResult<Vec<InstitutionRank>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<InstitutionRankModel>> {
            let mut conn = db.get_connection()?;
            let rows = institution_ranks::table
                .order(institution_ranks::rank.asc())
                .load::<InstitutionRankModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(Self::model_to_entity).collect())
    }
}
