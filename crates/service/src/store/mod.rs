//! Store lifecycle: domain types, repository abstraction, SeaORM backend and service.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::StoreService;
