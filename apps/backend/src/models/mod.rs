//! Wire payloads (camelCase JSON).

pub mod account;
pub mod restaurant;

pub use account::{LoginDto, LoginResponse, RegisterUserDto};
pub use restaurant::{
    CreateRestaurantDto, PagedResult, RestaurantDto, RestaurantQuery, UpdateRestaurantDto,
};
