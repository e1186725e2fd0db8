pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::controller::{CreatePetResult, EditPetResult, PetController};
pub use application::ports::{AuthSession, ADMIN_ROLE};
pub use domain::{Owner, Pet, Vaccine};
