use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::pets::domain::{
    entities::Pet,
    repositories::{NewPet, PetRepository, PetUpdate},
    services::set_reconciliation::reconcile,
};
use crate::modules::pets::infrastructure::models::{
    NewPetRecord, NewPetVaccine, OwnerRecord, PetChangeset, PetRecord, PetVaccineRecord,
    VaccineRecord,
};
use crate::schema::{owners, pet_vaccines, pets, vaccines};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::Database;

pub struct PetRepositoryImpl {
    db: Arc<Database>,
}

impl PetRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PetRepository for PetRepositoryImpl {
    async fn list_with_owners(&self) -> AppResult<Vec<Pet>> {
        let db = Arc::clone(&self.db);

        let rows = task::spawn_blocking(move || -> AppResult<Vec<(PetRecord, OwnerRecord)>> {
            let mut conn = db.get_connection()?;
            let rows = pets::table
                .inner_join(owners::table)
                .order(pets::pet_id.asc())
                .load::<(PetRecord, OwnerRecord)>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(rows
            .into_iter()
            .map(|(pet, owner)| {
                let mut pet = Pet::from(pet);
                pet.owner = Some(owner.into());
                pet
            })
            .collect())
    }

    async fn find_details(&self, id: i64) -> AppResult<Option<Pet>> {
        let db = Arc::clone(&self.db);

        let result = task::spawn_blocking(
            move || -> AppResult<Option<(PetRecord, OwnerRecord, Vec<VaccineRecord>)>> {
                let mut conn = db.get_connection()?;

                let row = pets::table
                    .inner_join(owners::table)
                    .filter(pets::pet_id.eq(id))
                    .first::<(PetRecord, OwnerRecord)>(&mut conn)
                    .optional()?;

                match row {
                    Some((pet, owner)) => {
                        let vaccine_rows = PetVaccineRecord::belonging_to(&pet)
                            .inner_join(vaccines::table)
                            .select(vaccines::all_columns)
                            .load::<VaccineRecord>(&mut conn)?;
                        Ok(Some((pet, owner, vaccine_rows)))
                    }
                    None => Ok(None),
                }
            },
        )
        .await??;

        Ok(result.map(|(pet, owner, vaccine_rows)| {
            let mut pet = Pet::from(pet);
            pet.owner = Some(owner.into());
            pet.vaccines = vaccine_rows.into_iter().map(Into::into).collect();
            pet
        }))
    }

    async fn find_with_vaccines(&self, id: i64) -> AppResult<Option<Pet>> {
        let db = Arc::clone(&self.db);

        let result = task::spawn_blocking(
            move || -> AppResult<Option<(PetRecord, Vec<VaccineRecord>)>> {
                let mut conn = db.get_connection()?;

                let row = pets::table
                    .filter(pets::pet_id.eq(id))
                    .first::<PetRecord>(&mut conn)
                    .optional()?;

                match row {
                    Some(pet) => {
                        let vaccine_rows = PetVaccineRecord::belonging_to(&pet)
                            .inner_join(vaccines::table)
                            .select(vaccines::all_columns)
                            .load::<VaccineRecord>(&mut conn)?;
                        Ok(Some((pet, vaccine_rows)))
                    }
                    None => Ok(None),
                }
            },
        )
        .await??;

        Ok(result.map(|(pet, vaccine_rows)| {
            let mut pet = Pet::from(pet);
            pet.vaccines = vaccine_rows.into_iter().map(Into::into).collect();
            pet
        }))
    }

    async fn find_with_owner(&self, id: i64) -> AppResult<Option<Pet>> {
        let db = Arc::clone(&self.db);

        let row = task::spawn_blocking(move || -> AppResult<Option<(PetRecord, OwnerRecord)>> {
            let mut conn = db.get_connection()?;
            let row = pets::table
                .inner_join(owners::table)
                .filter(pets::pet_id.eq(id))
                .first::<(PetRecord, OwnerRecord)>(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row.map(|(pet, owner)| {
            let mut pet = Pet::from(pet);
            pet.owner = Some(owner.into());
            pet
        }))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Pet>> {
        let db = Arc::clone(&self.db);

        let row = task::spawn_blocking(move || -> AppResult<Option<PetRecord>> {
            let mut conn = db.get_connection()?;
            let row = pets::table
                .filter(pets::pet_id.eq(id))
                .first::<PetRecord>(&mut conn)
                .optional()?;
            Ok(row)
        })
        .await??;

        Ok(row.map(Into::into))
    }

    async fn exists(&self, id: i64) -> AppResult<bool> {
        use diesel::dsl::exists;

        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let found = diesel::select(exists(pets::table.filter(pets::pet_id.eq(id))))
                .get_result::<bool>(&mut conn)?;
            Ok(found)
        })
        .await?
    }

    async fn create(&self, pet: NewPet, vaccine_ids: Vec<i64>) -> AppResult<Pet> {
        let db = Arc::clone(&self.db);

        let record = task::spawn_blocking(move || -> AppResult<PetRecord> {
            let mut conn = db.get_connection()?;

            conn.transaction::<_, AppError, _>(|conn| {
                let row = NewPetRecord {
                    name: pet.name,
                    pet_type: pet.pet_type,
                    age: pet.age,
                    owner_id: pet.owner_id,
                };

                let saved = diesel::insert_into(pets::table)
                    .values(&row)
                    .get_result::<PetRecord>(conn)?;

                if !vaccine_ids.is_empty() {
                    let links: Vec<NewPetVaccine> = vaccine_ids
                        .iter()
                        .map(|vaccine_id| NewPetVaccine {
                            pet_id: saved.pet_id,
                            vaccine_id: *vaccine_id,
                        })
                        .collect();

                    // relies on UNIQUE (pet_id, vaccine_id) in DB
                    diesel::insert_into(pet_vaccines::table)
                        .values(&links)
                        .on_conflict((pet_vaccines::pet_id, pet_vaccines::vaccine_id))
                        .do_nothing()
                        .execute(conn)?;
                }

                Ok(saved)
            })
        })
        .await??;

        Ok(record.into())
    }

    async fn update(
        &self,
        id: i64,
        expected_version: i64,
        changes: PetUpdate,
        vaccine_ids: Vec<i64>,
    ) -> AppResult<Pet> {
        let db = Arc::clone(&self.db);

        let record = task::spawn_blocking(move || -> AppResult<PetRecord> {
            let mut conn = db.get_connection()?;

            conn.transaction::<_, AppError, _>(|conn| {
                let changeset = PetChangeset {
                    name: changes.name,
                    pet_type: changes.pet_type,
                    age: changes.age,
                    owner_id: changes.owner_id,
                    row_version: expected_version + 1,
                };

                // Guarded by the concurrency token: zero rows means the pet
                // was modified or removed since it was read.
                let saved = diesel::update(
                    pets::table
                        .filter(pets::pet_id.eq(id))
                        .filter(pets::row_version.eq(expected_version)),
                )
                .set(&changeset)
                .get_result::<PetRecord>(conn)
                .optional()?;

                let saved = match saved {
                    Some(record) => record,
                    None => {
                        return Err(AppError::ConcurrencyConflict(format!(
                            "Pet {} was modified or removed by another request",
                            id
                        )))
                    }
                };

                let current: Vec<i64> = pet_vaccines::table
                    .filter(pet_vaccines::pet_id.eq(id))
                    .select(pet_vaccines::vaccine_id)
                    .load::<i64>(conn)?;

                let delta = reconcile(&current, &vaccine_ids);

                if !delta.removed.is_empty() {
                    diesel::delete(
                        pet_vaccines::table
                            .filter(pet_vaccines::pet_id.eq(id))
                            .filter(pet_vaccines::vaccine_id.eq_any(&delta.removed)),
                    )
                    .execute(conn)?;
                }

                if !delta.added.is_empty() {
                    let links: Vec<NewPetVaccine> = delta
                        .added
                        .iter()
                        .map(|vaccine_id| NewPetVaccine {
                            pet_id: id,
                            vaccine_id: *vaccine_id,
                        })
                        .collect();

                    diesel::insert_into(pet_vaccines::table)
                        .values(&links)
                        .on_conflict((pet_vaccines::pet_id, pet_vaccines::vaccine_id))
                        .do_nothing()
                        .execute(conn)?;
                }

                Ok(saved)
            })
        })
        .await??;

        Ok(record.into())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let n = diesel::delete(pets::table.filter(pets::pet_id.eq(id))).execute(&mut conn)?;
            if n == 0 {
                return Err(AppError::NotFound(format!(
                    "Pet with id {} was not found",
                    id
                )));
            }
            Ok(())
        })
        .await?
    }
}
