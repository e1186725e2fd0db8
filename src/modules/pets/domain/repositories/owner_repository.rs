use async_trait::async_trait;

use crate::modules::pets::domain::entities::Owner;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// All owners, for the selection widgets.
    async fn list(&self) -> AppResult<Vec<Owner>>;
}
