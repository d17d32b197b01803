//! Billboards hang off a store; every operation is gated by the owner check.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::BillboardService;
