#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use vetclinic::modules::pets::application::forms::PetFormData;
use vetclinic::modules::pets::application::ports::AuthSession;
use vetclinic::modules::pets::domain::entities::{Owner, Pet, Vaccine};
use vetclinic::modules::pets::domain::repositories::{
    NewPet, OwnerRepository, PetRepository, PetUpdate, VaccineRepository,
};
use vetclinic::modules::pets::PetController;
use vetclinic::shared::errors::AppResult;

mock! {
    pub Pets {}

    #[async_trait]
    impl PetRepository for Pets {
        async fn list_with_owners(&self) -> AppResult<Vec<Pet>>;
        async fn find_details(&self, id: i64) -> AppResult<Option<Pet>>;
        async fn find_with_vaccines(&self, id: i64) -> AppResult<Option<Pet>>;
        async fn find_with_owner(&self, id: i64) -> AppResult<Option<Pet>>;
        async fn find_by_id(&self, id: i64) -> AppResult<Option<Pet>>;
        async fn exists(&self, id: i64) -> AppResult<bool>;
        async fn create(&self, pet: NewPet, vaccine_ids: Vec<i64>) -> AppResult<Pet>;
        async fn update(
            &self,
            id: i64,
            expected_version: i64,
            changes: PetUpdate,
            vaccine_ids: Vec<i64>,
        ) -> AppResult<Pet>;
        async fn delete(&self, id: i64) -> AppResult<()>;
    }
}

mock! {
    pub Owners {}

    #[async_trait]
    impl OwnerRepository for Owners {
        async fn list(&self) -> AppResult<Vec<Owner>>;
    }
}

mock! {
    pub Vaccines {}

    #[async_trait]
    impl VaccineRepository for Vaccines {
        async fn list(&self) -> AppResult<Vec<Vaccine>>;
        async fn find_by_id(&self, id: i64) -> AppResult<Option<Vaccine>>;
    }
}

/// Session stub standing in for the hosting layer's auth integration.
pub struct StubSession {
    user: Option<String>,
    roles: Vec<String>,
}

impl AuthSession for StubSession {
    fn user_id(&self) -> Option<String> {
        self.user.clone()
    }

    fn is_in_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

pub fn anonymous() -> StubSession {
    StubSession {
        user: None,
        roles: Vec::new(),
    }
}

pub fn clinic_user() -> StubSession {
    StubSession {
        user: Some("staff".to_string()),
        roles: Vec::new(),
    }
}

pub fn admin() -> StubSession {
    StubSession {
        user: Some("admin".to_string()),
        roles: vec!["Admin".to_string()],
    }
}

pub fn controller(pets: MockPets, owners: MockOwners, vaccines: MockVaccines) -> PetController {
    PetController::new(Arc::new(pets), Arc::new(owners), Arc::new(vaccines))
}

// ============= FACTORIES =============

pub fn owner(owner_id: i64, name: &str) -> Owner {
    Owner {
        owner_id,
        name: name.to_string(),
    }
}

pub fn vaccine(vaccine_id: i64, name: &str) -> Vaccine {
    Vaccine {
        vaccine_id,
        name: name.to_string(),
    }
}

pub fn pet(pet_id: i64) -> Pet {
    Pet {
        pet_id,
        name: "Rex".to_string(),
        pet_type: "Dog".to_string(),
        age: 3,
        owner_id: 7,
        row_version: 0,
        owner: None,
        vaccines: Vec::new(),
    }
}

pub fn pet_with_owner(pet_id: i64, owner: Owner) -> Pet {
    let mut pet = pet(pet_id);
    pet.owner_id = owner.owner_id;
    pet.owner = Some(owner);
    pet
}

pub fn pet_with_vaccines(pet_id: i64, vaccines: Vec<Vaccine>) -> Pet {
    let mut pet = pet(pet_id);
    pet.vaccines = vaccines;
    pet
}

pub fn submission(
    pet_id: Option<i64>,
    name: &str,
    pet_type: &str,
    age: &str,
    owner_id: &str,
) -> PetFormData {
    PetFormData {
        pet_id,
        name: name.to_string(),
        pet_type: pet_type.to_string(),
        age: age.to_string(),
        owner_id: owner_id.to_string(),
    }
}
