use async_trait::async_trait;

use crate::modules::pets::domain::entities::Vaccine;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait VaccineRepository: Send + Sync {
    /// All vaccines, for the selection widgets.
    async fn list(&self) -> AppResult<Vec<Vaccine>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Vaccine>>;
}
