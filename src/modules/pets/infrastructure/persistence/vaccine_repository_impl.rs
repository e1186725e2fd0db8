use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::pets::domain::{entities::Vaccine, repositories::VaccineRepository};
use crate::modules::pets::infrastructure::models::VaccineRecord;
use crate::schema::vaccines;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::Database;

pub struct VaccineRepositoryImpl {
    db: Arc<Database>,
}

impl VaccineRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VaccineRepository for VaccineRepositoryImpl {
    async fn list(&self) -> AppResult<Vec<Vaccine>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<VaccineRecord>> {
            let mut conn = db.get_connection()?;
            let rows = vaccines::table
                .order(vaccines::name.asc())
                .load::<VaccineRecord>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Vaccine>> {
        let db = Arc::clone(&self.db);

        let row = task::spawn_blocking(move || -> AppResult<Option<VaccineRecord>> {
            let mut conn = db.get_connection()?;
            let row = vaccines::table
                .filter(vaccines::vaccine_id.eq(id))
                .first::<VaccineRecord>(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row.map(Into::into))
    }
}
