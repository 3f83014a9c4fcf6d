use async_trait::async_trait;

use super::domain::{BootstrapOutcome, CatalogEntry, NewServiceRequest};
use crate::errors::ServiceError;

/// Persistence for the catalog and the request log.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Atomically insert `entries` if, and only if, the catalog is empty.
    async fn seed_if_empty(&self, entries: &[(&str, &str)]) -> Result<BootstrapOutcome, ServiceError>;
    /// All services ordered by name ascending.
    async fn list_services(&self) -> Result<Vec<CatalogEntry>, ServiceError>;
    async fn service_exists(&self, service_id: i32) -> Result<bool, ServiceError>;
    /// Append a request; returns its generated id.
    async fn create_request(&self, req: NewServiceRequest) -> Result<i32, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockCatalogRepository {
        services: Mutex<Vec<CatalogEntry>>,
        requests: Mutex<Vec<(i32, NewServiceRequest)>>,
        fail_with: Option<String>,
    }

    impl MockCatalogRepository {
        /// Every call fails with a database error.
        pub fn failing(msg: &str) -> Self {
            Self { fail_with: Some(msg.to_string()), ..Default::default() }
        }

        pub fn requests(&self) -> Vec<(i32, NewServiceRequest)> {
            self.requests.lock().unwrap_or_else(|e| e.into_inner()).clone()
        }

        pub fn services(&self) -> Vec<CatalogEntry> {
            self.services.lock().unwrap_or_else(|e| e.into_inner()).clone()
        }

        fn check(&self) -> Result<(), ServiceError> {
            match &self.fail_with {
                Some(msg) => Err(ServiceError::Db(msg.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl CatalogRepository for MockCatalogRepository {
        async fn seed_if_empty(&self, entries: &[(&str, &str)]) -> Result<BootstrapOutcome, ServiceError> {
            self.check()?;
            let mut services = self.services.lock().unwrap_or_else(|e| e.into_inner());
            if !services.is_empty() {
                return Ok(BootstrapOutcome::AlreadySeeded(services.len() as u64));
            }
            for (i, (name, description)) in entries.iter().enumerate() {
                services.push(CatalogEntry { id: i as i32 + 1, name: name.to_string(), description: description.to_string() });
            }
            Ok(BootstrapOutcome::Seeded(entries.len() as u64))
        }

        async fn list_services(&self) -> Result<Vec<CatalogEntry>, ServiceError> {
            self.check()?;
            let mut out = self.services.lock().unwrap_or_else(|e| e.into_inner()).clone();
            out.sort_by(|a, b| a.name.cmp(&b.name));
            Ok(out)
        }

        async fn service_exists(&self, service_id: i32) -> Result<bool, ServiceError> {
            self.check()?;
            Ok(self.services.lock().unwrap_or_else(|e| e.into_inner()).iter().any(|s| s.id == service_id))
        }

        async fn create_request(&self, req: NewServiceRequest) -> Result<i32, ServiceError> {
            self.check()?;
            let mut requests = self.requests.lock().unwrap_or_else(|e| e.into_inner());
            let id = requests.len() as i32 + 1;
            requests.push((id, req));
            Ok(id)
        }
    }
}
