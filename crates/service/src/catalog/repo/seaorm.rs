use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::debug;

use crate::catalog::domain::{BootstrapOutcome, CatalogEntry, NewServiceRequest};
use crate::catalog::repository::CatalogRepository;
use crate::errors::ServiceError;
use models::{catalog_service, service_request};

pub struct SeaOrmCatalogRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn seed_if_empty(&self, entries: &[(&str, &str)]) -> Result<BootstrapOutcome, ServiceError> {
        // Count and insert in one transaction; the unique name index makes a
        // concurrent seeder's rows no-ops instead of duplicates.
        let txn = self.db.begin().await?;
        let existing = catalog_service::count(&txn).await?;
        if existing > 0 {
            txn.commit().await?;
            return Ok(BootstrapOutcome::AlreadySeeded(existing));
        }
        let inserted = catalog_service::insert_many_ignoring_existing(&txn, entries).await?;
        txn.commit().await?;
        debug!(inserted, "catalog seed committed");
        Ok(BootstrapOutcome::Seeded(inserted))
    }

    async fn list_services(&self) -> Result<Vec<CatalogEntry>, ServiceError> {
        let rows = catalog_service::list_by_name(&self.db).await?;
        Ok(rows.into_iter().map(CatalogEntry::from).collect())
    }

    async fn service_exists(&self, service_id: i32) -> Result<bool, ServiceError> {
        Ok(catalog_service::exists(&self.db, service_id).await?)
    }

    async fn create_request(&self, req: NewServiceRequest) -> Result<i32, ServiceError> {
        let created = service_request::create(&self.db, req.user_id, req.service_id, &req.details).await?;
        Ok(created.id)
    }
}
