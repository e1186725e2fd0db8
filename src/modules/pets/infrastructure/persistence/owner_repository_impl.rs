use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::pets::domain::{entities::Owner, repositories::OwnerRepository};
use crate::modules::pets::infrastructure::models::OwnerRecord;
use crate::schema::owners;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::Database;

pub struct OwnerRepositoryImpl {
    db: Arc<Database>,
}

impl OwnerRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OwnerRepository for OwnerRepositoryImpl {
    async fn list(&self) -> AppResult<Vec<Owner>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<OwnerRecord>> {
            let mut conn = db.get_connection()?;
            let rows = owners::table
                .order(owners::name.asc())
                .load::<OwnerRecord>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
