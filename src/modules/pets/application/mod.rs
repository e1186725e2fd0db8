pub mod controller;
pub mod forms;
pub mod ports;

pub use controller::{CreatePetResult, EditPetResult, PetController};
pub use forms::{FieldError, PetForm, PetFormData, SelectOption};
