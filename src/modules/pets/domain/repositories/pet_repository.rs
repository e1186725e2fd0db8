use async_trait::async_trait;

use crate::modules::pets::domain::entities::Pet;
use crate::shared::errors::AppResult;

/// Scalar fields for a new pet. The id and concurrency token are
/// storage-generated.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPet {
    pub name: String,
    pub pet_type: String,
    pub age: i32,
    pub owner_id: i64,
}

/// Allow-listed scalar fields applied by an edit. Everything else on the
/// persisted row is left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct PetUpdate {
    pub name: String,
    pub pet_type: String,
    pub age: i32,
    pub owner_id: i64,
}

#[async_trait]
pub trait PetRepository: Send + Sync {
    /// All pets with their owner eagerly joined.
    async fn list_with_owners(&self) -> AppResult<Vec<Pet>>;

    /// One pet with owner and vaccines eagerly joined.
    async fn find_details(&self, id: i64) -> AppResult<Option<Pet>>;

    /// One pet with vaccines eagerly joined.
    async fn find_with_vaccines(&self, id: i64) -> AppResult<Option<Pet>>;

    /// One pet with owner eagerly joined.
    async fn find_with_owner(&self, id: i64) -> AppResult<Option<Pet>>;

    /// One pet, no associations loaded.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Pet>>;

    /// True iff a pet row with this id exists.
    async fn exists(&self, id: i64) -> AppResult<bool>;

    /// Insert the pet and its vaccine links in one transaction.
    async fn create(&self, pet: NewPet, vaccine_ids: Vec<i64>) -> AppResult<Pet>;

    /// Apply the scalar changes guarded by the concurrency token and
    /// reconcile the vaccine set to `vaccine_ids`, all in one transaction.
    /// Returns `ConcurrencyConflict` when the guarded update matches no row.
    async fn update(
        &self,
        id: i64,
        expected_version: i64,
        changes: PetUpdate,
        vaccine_ids: Vec<i64>,
    ) -> AppResult<Pet>;

    /// Remove the pet row. Vaccine links cascade in storage.
    async fn delete(&self, id: i64) -> AppResult<()>;
}
