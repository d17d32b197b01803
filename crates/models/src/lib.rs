//! SeaORM entities for stores and billboards, plus the field validation
//! shared by every writer and the connection helpers.

pub mod errors;
pub mod db;
pub mod store;
pub mod billboard;

#[cfg(test)]
mod tests;
