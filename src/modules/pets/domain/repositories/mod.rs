pub mod owner_repository;
pub mod pet_repository;
pub mod vaccine_repository;

pub use owner_repository::OwnerRepository;
pub use pet_repository::{NewPet, PetRepository, PetUpdate};
pub use vaccine_repository::VaccineRepository;
