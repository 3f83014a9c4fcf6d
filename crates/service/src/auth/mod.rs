//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Stateless token check: a caller is authenticated when a stored user
//! matches both the numeric id and the token exactly.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::AuthGate;
