use serde::{Deserialize, Serialize};

use crate::modules::pets::domain::entities::{Owner, Pet, Vaccine};

/// Field error shown when the submitted pet type fails the letters-only rule.
pub const PET_TYPE_ERROR: &str =
    "The pet type should contain only letters and cannot contain numbers or special characters.";

/// A pet form submission as it arrives from the rendering layer. Age and
/// owner come in as raw text so a bad value surfaces as a field error on the
/// re-rendered form instead of a rejected request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetFormData {
    pub pet_id: Option<i64>,
    pub name: String,
    pub pet_type: String,
    pub age: String,
    pub owner_id: String,
}

impl PetFormData {
    pub fn from_pet(pet: &Pet) -> Self {
        Self {
            pet_id: Some(pet.pet_id),
            name: pet.name.clone(),
            pet_type: pet.pet_type.clone(),
            age: pet.age.to_string(),
            owner_id: pet.owner_id.to_string(),
        }
    }

    /// Bind the submitted text into typed scalar fields, collecting one
    /// error per failing field. The letters-only pet type rule is not part
    /// of binding; create applies it separately.
    pub fn bind(&self) -> Result<BoundPet, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("Name", "The Name field is required."));
        }

        let age = match self.age.trim().parse::<i32>() {
            Ok(age) => Some(age),
            Err(_) => {
                errors.push(FieldError::new(
                    "Age",
                    format!("The value '{}' is not valid for Age.", self.age),
                ));
                None
            }
        };

        let owner_id = match self.owner_id.trim().parse::<i64>() {
            Ok(owner_id) => Some(owner_id),
            Err(_) => {
                errors.push(FieldError::new(
                    "OwnerId",
                    format!("The value '{}' is not valid for Owner.", self.owner_id),
                ));
                None
            }
        };

        match (age, owner_id) {
            (Some(age), Some(owner_id)) if errors.is_empty() => Ok(BoundPet {
                name: self.name.trim().to_string(),
                pet_type: self.pet_type.clone(),
                age,
                owner_id,
            }),
            _ => Err(errors),
        }
    }

    /// The submitted owner id, when it parses. Used to keep the owner
    /// dropdown selection across a re-render even if other fields failed.
    pub fn submitted_owner_id(&self) -> Option<i64> {
        self.owner_id.trim().parse::<i64>().ok()
    }
}

/// Successfully bound scalar fields of a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundPet {
    pub name: String,
    pub pet_type: String,
    pub age: i32,
    pub owner_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// One entry of a selection widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    pub id: i64,
    pub name: String,
    pub selected: bool,
}

/// View model for the create and edit forms: the (possibly re-rendered)
/// input plus the owner and vaccine reference lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetForm {
    pub pet: PetFormData,
    pub owner_options: Vec<SelectOption>,
    pub vaccine_options: Vec<SelectOption>,
    pub field_errors: Vec<FieldError>,
}

impl PetForm {
    /// Empty create form: nothing selected, no errors.
    pub fn empty(owners: &[Owner], vaccines: &[Vaccine]) -> Self {
        Self {
            pet: PetFormData::default(),
            owner_options: owner_options(owners, None),
            vaccine_options: vaccine_options(vaccines, &[]),
            field_errors: Vec::new(),
        }
    }

    /// Edit form populated from a persisted pet: current owner and current
    /// vaccine ids pre-selected.
    pub fn for_pet(pet: &Pet, owners: &[Owner], vaccines: &[Vaccine]) -> Self {
        let selected = pet.vaccine_ids();
        Self {
            pet: PetFormData::from_pet(pet),
            owner_options: owner_options(owners, Some(pet.owner_id)),
            vaccine_options: vaccine_options(vaccines, &selected),
            field_errors: Vec::new(),
        }
    }

    /// Re-rendered form carrying the rejected submission. The owner
    /// selection follows the submitted value; the vaccine selection is
    /// whatever the caller decides (unselected on create, the submitted ids
    /// on edit).
    pub fn rerender(
        data: PetFormData,
        owners: &[Owner],
        vaccines: &[Vaccine],
        selected_vaccines: &[i64],
        field_errors: Vec<FieldError>,
    ) -> Self {
        let selected_owner = data.submitted_owner_id();
        Self {
            pet: data,
            owner_options: owner_options(owners, selected_owner),
            vaccine_options: vaccine_options(vaccines, selected_vaccines),
            field_errors,
        }
    }

    pub fn has_error_on(&self, field: &str) -> bool {
        self.field_errors.iter().any(|e| e.field == field)
    }
}

pub fn owner_options(owners: &[Owner], selected: Option<i64>) -> Vec<SelectOption> {
    owners
        .iter()
        .map(|o| SelectOption {
            id: o.owner_id,
            name: o.name.clone(),
            selected: selected == Some(o.owner_id),
        })
        .collect()
}

pub fn vaccine_options(vaccines: &[Vaccine], selected: &[i64]) -> Vec<SelectOption> {
    vaccines
        .iter()
        .map(|v| SelectOption {
            id: v.vaccine_id,
            name: v.name.clone(),
            selected: selected.contains(&v.vaccine_id),
        })
        .collect()
}
