//! Maanushi Domain Concerns

pub mod admins;
pub mod carts;
pub mod orders;
pub mod products;
pub mod reports;
pub mod users;
