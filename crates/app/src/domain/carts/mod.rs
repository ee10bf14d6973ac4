//! Carts
//!
//! Every line-item mutation runs in one transaction that writes the item,
//! recomputes the cart's grand total from its items and stores it, so a cart
//! is never observed with a total that disagrees with its lines.

pub mod data;
mod errors;
pub mod records;
mod repositories;
pub mod service;

pub use errors::CartsServiceError;
pub use service::*;
