pub mod accounts;
pub mod authorization;
pub mod restaurants;
