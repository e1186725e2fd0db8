pub mod owner_repository_impl;
pub mod pet_repository_impl;
pub mod vaccine_repository_impl;

pub use owner_repository_impl::OwnerRepositoryImpl;
pub use pet_repository_impl::PetRepositoryImpl;
pub use vaccine_repository_impl::VaccineRepositoryImpl;
