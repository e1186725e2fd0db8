pub mod entities;
pub mod repositories;
pub mod services;

// Re-exports for easy access
pub use entities::{Owner, Pet, Vaccine};
pub use repositories::{NewPet, OwnerRepository, PetRepository, PetUpdate, VaccineRepository};
