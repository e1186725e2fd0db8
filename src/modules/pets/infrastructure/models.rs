use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::modules::pets::domain::entities::{Owner, Pet, Vaccine};
use crate::schema::{owners, pet_vaccines, pets, vaccines};

// ============= PET MODELS =============

// For reading from database - with associations support
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = pets)]
#[diesel(primary_key(pet_id))]
pub struct PetRecord {
    pub pet_id: i64,
    pub name: String,
    pub pet_type: String,
    pub age: i32,
    pub owner_id: i64,
    pub row_version: i64,
}

// For inserting new pets; id and concurrency token are storage-generated
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = pets)]
pub struct NewPetRecord {
    pub name: String,
    pub pet_type: String,
    pub age: i32,
    pub owner_id: i64,
}

// For the allow-listed partial update (excludes id)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = pets)]
pub struct PetChangeset {
    pub name: String,
    pub pet_type: String,
    pub age: i32,
    pub owner_id: i64,
    pub row_version: i64,
}

// ============= OWNER / VACCINE MODELS =============

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = owners)]
#[diesel(primary_key(owner_id))]
pub struct OwnerRecord {
    pub owner_id: i64,
    pub name: String,
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = vaccines)]
#[diesel(primary_key(vaccine_id))]
pub struct VaccineRecord {
    pub vaccine_id: i64,
    pub name: String,
}

// ============= PET-VACCINE ASSOCIATION =============

// For reading with associations
#[derive(Queryable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(PetRecord, foreign_key = pet_id))]
#[diesel(belongs_to(VaccineRecord, foreign_key = vaccine_id))]
#[diesel(table_name = pet_vaccines)]
#[diesel(primary_key(pet_id, vaccine_id))]
pub struct PetVaccineRecord {
    pub pet_id: i64,
    pub vaccine_id: i64,
    pub added_at: DateTime<Utc>,
}

// For inserting new pet-vaccine links; added_at defaults in storage
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = pet_vaccines)]
pub struct NewPetVaccine {
    pub pet_id: i64,
    pub vaccine_id: i64,
}

// ============= ROW -> ENTITY CONVERSIONS =============

impl From<PetRecord> for Pet {
    fn from(record: PetRecord) -> Self {
        Pet {
            pet_id: record.pet_id,
            name: record.name,
            pet_type: record.pet_type,
            age: record.age,
            owner_id: record.owner_id,
            row_version: record.row_version,
            owner: None,
            vaccines: Vec::new(),
        }
    }
}

impl From<OwnerRecord> for Owner {
    fn from(record: OwnerRecord) -> Self {
        Owner {
            owner_id: record.owner_id,
            name: record.name,
        }
    }
}

impl From<VaccineRecord> for Vaccine {
    fn from(record: VaccineRecord) -> Self {
        Vaccine {
            vaccine_id: record.vaccine_id,
            name: record.name,
        }
    }
}
