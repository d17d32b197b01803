//! Service layer for the storefront admin API.
//! - Separates business rules from data access (repository traits per aggregate).
//! - Reuses validation and entity definitions from the `models` crate.
//! - Ships SeaORM and in-memory repositories behind the same traits.

pub mod errors;
pub mod store;
pub mod billboard;
pub mod ownership;
pub mod user_service;
pub mod health;
#[cfg(test)]
pub mod test_support;

pub use billboard::BillboardService;
pub use store::StoreService;
pub use user_service::UserService;
