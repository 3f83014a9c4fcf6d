//! Service catalog and request gateway.
//!
//! Read-only catalog of services plus an append-only log of service
//! requests, both behind the [`AuthGate`](crate::auth::AuthGate).

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::CatalogService;
