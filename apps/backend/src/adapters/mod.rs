//! Implementations of the repository traits.

pub mod memory;
pub mod restaurants_sea;
pub mod users_sea;

pub use memory::InMemoryStore;
pub use restaurants_sea::SeaRestaurantRepo;
pub use users_sea::SeaAccountRepo;
