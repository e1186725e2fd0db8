pub mod models;
pub mod persistence;

pub use persistence::{OwnerRepositoryImpl, PetRepositoryImpl, VaccineRepositoryImpl};
