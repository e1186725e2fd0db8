use std::sync::Arc;

use crate::log_error;
use crate::modules::pets::application::forms::{
    FieldError, PetForm, PetFormData, PET_TYPE_ERROR,
};
use crate::modules::pets::application::ports::{AuthSession, ADMIN_ROLE};
use crate::modules::pets::domain::{
    entities::{Pet, Vaccine},
    repositories::{NewPet, OwnerRepository, PetRepository, PetUpdate, VaccineRepository},
};
use crate::shared::errors::{AppError, AppResult};

/// Outcome of a create submission. `Created` means the caller should
/// redirect to the list; `Form` carries the re-rendered form with its field
/// errors.
#[derive(Debug, Clone)]
pub enum CreatePetResult {
    Created(Pet),
    Form(PetForm),
}

/// Outcome of an edit submission, same shape as [`CreatePetResult`].
#[derive(Debug, Clone)]
pub enum EditPetResult {
    Updated(Pet),
    Form(PetForm),
}

/// Request handlers for the pet record screens. Every method authorizes the
/// caller's session first; edit and delete flavors require the Admin role.
pub struct PetController {
    pets: Arc<dyn PetRepository>,
    owners: Arc<dyn OwnerRepository>,
    vaccines: Arc<dyn VaccineRepository>,
}

impl PetController {
    pub fn new(
        pets: Arc<dyn PetRepository>,
        owners: Arc<dyn OwnerRepository>,
        vaccines: Arc<dyn VaccineRepository>,
    ) -> Self {
        Self {
            pets,
            owners,
            vaccines,
        }
    }

    /// GET pets: all pets with their owner joined.
    pub async fn list(&self, auth: &dyn AuthSession) -> AppResult<Vec<Pet>> {
        require_user(auth)?;
        self.pets.list_with_owners().await
    }

    /// GET pets/details: one pet with owner and vaccines joined.
    pub async fn details(&self, auth: &dyn AuthSession, id: Option<i64>) -> AppResult<Pet> {
        require_user(auth)?;
        let id = id.ok_or_else(|| AppError::BadRequest("Pet Id is missing".to_string()))?;

        self.pets
            .find_details(id)
            .await?
            .ok_or_else(|| pet_not_found(id))
    }

    /// GET pets/create: empty form plus the owner and vaccine reference
    /// lists.
    pub async fn create_form(&self, auth: &dyn AuthSession) -> AppResult<PetForm> {
        require_user(auth)?;
        let owners = self.owners.list().await?;
        let vaccines = self.vaccines.list().await?;
        Ok(PetForm::empty(&owners, &vaccines))
    }

    /// POST pets/create.
    pub async fn create(
        &self,
        auth: &dyn AuthSession,
        form: PetFormData,
        selected_vaccine_ids: Option<Vec<i64>>,
    ) -> AppResult<CreatePetResult> {
        require_user(auth)?;

        let resolved = self.resolve_vaccines(selected_vaccine_ids.as_deref()).await?;

        // Letters-only rule applies before anything else; the re-rendered
        // form keeps the submitted owner selected and the vaccine list
        // unselected.
        if !crate::shared::utils::Validator::pet_type_is_valid(&form.pet_type) {
            let view = self
                .rerender(form, &[], vec![FieldError::new("Type", PET_TYPE_ERROR)])
                .await?;
            return Ok(CreatePetResult::Form(view));
        }

        let bound = match form.bind() {
            Ok(bound) => bound,
            Err(errors) => {
                let view = self.rerender(form, &[], errors).await?;
                return Ok(CreatePetResult::Form(view));
            }
        };

        let new_pet = NewPet {
            name: bound.name,
            pet_type: bound.pet_type,
            age: bound.age,
            owner_id: bound.owner_id,
        };
        let vaccine_ids: Vec<i64> = resolved.iter().map(|v| v.vaccine_id).collect();

        let mut pet = match self.pets.create(new_pet, vaccine_ids).await {
            Ok(pet) => pet,
            Err(e) => {
                log_error!("Failed to create pet: {}", e);
                return Err(e);
            }
        };
        pet.vaccines = resolved;

        Ok(CreatePetResult::Created(pet))
    }

    /// GET pets/edit: form populated from the persisted pet, owner and
    /// current vaccines pre-selected.
    pub async fn edit_form(&self, auth: &dyn AuthSession, id: Option<i64>) -> AppResult<PetForm> {
        require_admin(auth)?;
        let id = id.ok_or_else(|| AppError::BadRequest("Pet Id is missing".to_string()))?;

        let pet = self
            .pets
            .find_with_vaccines(id)
            .await?
            .ok_or_else(|| pet_not_found(id))?;

        let owners = self.owners.list().await?;
        let vaccines = self.vaccines.list().await?;
        Ok(PetForm::for_pet(&pet, &owners, &vaccines))
    }

    /// POST pets/edit.
    pub async fn edit(
        &self,
        auth: &dyn AuthSession,
        id: Option<i64>,
        form: PetFormData,
        selected_vaccine_ids: Option<Vec<i64>>,
    ) -> AppResult<EditPetResult> {
        require_admin(auth)?;
        let id = id.ok_or_else(|| AppError::BadRequest("Pet Id is missing".to_string()))?;
        if form.pet_id != Some(id) {
            return Err(AppError::BadRequest(
                "Submitted pet id does not match the request".to_string(),
            ));
        }

        let existing = self
            .pets
            .find_with_vaccines(id)
            .await?
            .ok_or_else(|| pet_not_found(id))?;

        // An omitted selection clears the whole set; submitted ids are
        // resolved with unknown ones silently dropped.
        let target: Vec<i64> = self
            .resolve_vaccines(selected_vaccine_ids.as_deref())
            .await?
            .into_iter()
            .map(|v| v.vaccine_id)
            .collect();

        // Allow-listed partial update: Name, Type, Age, OwnerId. The
        // letters-only type rule is intentionally not re-applied here.
        let bound = match form.bind() {
            Ok(bound) => bound,
            Err(errors) => {
                let submitted = selected_vaccine_ids.unwrap_or_default();
                let view = self.rerender(form, &submitted, errors).await?;
                return Ok(EditPetResult::Form(view));
            }
        };

        let changes = PetUpdate {
            name: bound.name,
            pet_type: bound.pet_type,
            age: bound.age,
            owner_id: bound.owner_id,
        };

        match self
            .pets
            .update(id, existing.row_version, changes, target)
            .await
        {
            Ok(pet) => Ok(EditPetResult::Updated(pet)),
            Err(AppError::ConcurrencyConflict(reason)) => {
                // The guarded update matched no row: either the pet is gone,
                // or another request got there first.
                if self.pets.exists(id).await? {
                    log_error!("Concurrent update conflict on pet {}: {}", id, reason);
                    Err(AppError::ConcurrencyConflict(reason))
                } else {
                    Err(pet_not_found(id))
                }
            }
            Err(e) => {
                log_error!("Failed to update pet {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// GET pets/delete: the pet with its owner, for the confirmation page.
    pub async fn delete_form(&self, auth: &dyn AuthSession, id: Option<i64>) -> AppResult<Pet> {
        require_admin(auth)?;
        let id = id.ok_or_else(|| AppError::BadRequest("Pet Id is missing".to_string()))?;

        self.pets
            .find_with_owner(id)
            .await?
            .ok_or_else(|| pet_not_found(id))
    }

    /// POST pets/delete.
    pub async fn delete(&self, auth: &dyn AuthSession, id: i64) -> AppResult<()> {
        require_admin(auth)?;

        if self.pets.find_by_id(id).await?.is_none() {
            return Err(pet_not_found(id));
        }

        self.pets.delete(id).await
    }

    /// Resolve submitted vaccine ids against storage, silently dropping ids
    /// that do not exist. `None` resolves to an empty set.
    async fn resolve_vaccines(&self, ids: Option<&[i64]>) -> AppResult<Vec<Vaccine>> {
        let mut resolved = Vec::new();
        if let Some(ids) = ids {
            for id in ids {
                if let Some(vaccine) = self.vaccines.find_by_id(*id).await? {
                    resolved.push(vaccine);
                }
            }
        }
        Ok(resolved)
    }

    async fn rerender(
        &self,
        form: PetFormData,
        selected_vaccines: &[i64],
        errors: Vec<FieldError>,
    ) -> AppResult<PetForm> {
        let owners = self.owners.list().await?;
        let vaccines = self.vaccines.list().await?;
        Ok(PetForm::rerender(
            form,
            &owners,
            &vaccines,
            selected_vaccines,
            errors,
        ))
    }
}

fn require_user(auth: &dyn AuthSession) -> AppResult<()> {
    if !auth.is_authenticated() {
        return Err(AppError::Unauthorized(
            "Sign-in is required for pet records".to_string(),
        ));
    }
    Ok(())
}

fn require_admin(auth: &dyn AuthSession) -> AppResult<()> {
    require_user(auth)?;
    if !auth.is_in_role(ADMIN_ROLE) {
        return Err(AppError::Forbidden(
            "The Admin role is required for this operation".to_string(),
        ));
    }
    Ok(())
}

fn pet_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Pet with id {} was not found", id))
}
