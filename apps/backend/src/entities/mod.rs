pub mod restaurants;
pub mod users;

pub use restaurants::Entity as Restaurants;
pub use restaurants::Model as RestaurantRow;
pub use users::Entity as Users;
pub use users::Model as UserRow;
