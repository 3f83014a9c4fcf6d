use std::sync::Arc;

use common::reporting::ErrorReporter;
use models::catalog_service::SEED_SERVICES;
use tracing::{error, info, instrument};

use super::domain::{BootstrapOutcome, CatalogEntry, ListServicesInput, NewServiceRequest, SubmitRequestInput, SubmittedRequest};
use super::repository::CatalogRepository;
use crate::auth::{repository::UserRepository, AuthGate};
use crate::errors::ServiceError;

/// Application service for the catalog: bootstrap, list, submit.
pub struct CatalogService {
    catalog: Arc<dyn CatalogRepository>,
    auth: AuthGate,
}

impl CatalogService {
    pub fn new(catalog: Arc<dyn CatalogRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { catalog, auth: AuthGate::new(users) }
    }

    /// Seed the default services when the catalog is empty.
    #[instrument(skip(self))]
    pub async fn bootstrap(&self) -> Result<BootstrapOutcome, ServiceError> {
        let outcome = self.catalog.seed_if_empty(&SEED_SERVICES).await?;
        match outcome {
            BootstrapOutcome::Seeded(n) => info!(event = "catalog_seeded", inserted = n, "service catalog seeded"),
            BootstrapOutcome::AlreadySeeded(n) => info!(event = "catalog_present", existing = n, "service catalog already populated"),
        }
        Ok(outcome)
    }

    /// [`bootstrap`](Self::bootstrap) for startup: failures are logged and
    /// reported, never returned.
    pub async fn bootstrap_or_report(&self, reporter: &dyn ErrorReporter) -> Option<BootstrapOutcome> {
        match self.bootstrap().await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                error!(event = "catalog_bootstrap_failed", error = %e, "catalog bootstrap failed; continuing");
                reporter.capture("catalog_bootstrap", &e);
                None
            }
        }
    }

    /// Authenticated listing of every service, ordered by name.
    ///
    /// # Examples
    /// ```
    /// use service::catalog::{CatalogService, domain::ListServicesInput, repository::mock::MockCatalogRepository};
    /// use service::auth::repository::mock::MockUserRepository;
    /// use std::sync::Arc;
    /// let svc = CatalogService::new(
    ///     Arc::new(MockCatalogRepository::default()),
    ///     Arc::new(MockUserRepository::default().with_user(1, "t1")),
    /// );
    /// tokio_test::block_on(svc.bootstrap()).unwrap();
    /// let input = ListServicesInput { user_id: Some(1), token: Some("t1".into()) };
    /// let services = tokio_test::block_on(svc.list_services(input)).unwrap();
    /// assert_eq!(services[0].name, "Application Server");
    /// ```
    #[instrument(skip(self, input), fields(user_id = ?input.user_id))]
    pub async fn list_services(&self, input: ListServicesInput) -> Result<Vec<CatalogEntry>, ServiceError> {
        self.auth.authenticate(input.user_id, input.token.as_deref()).await?;
        let services = self.catalog.list_services().await?;
        info!(count = services.len(), "list services");
        Ok(services)
    }

    /// Validate, authenticate, check the service, then append the request.
    /// Each step is a hard gate, in that order.
    #[instrument(skip(self, input), fields(user_id = ?input.user_id, service_id = ?input.service_id))]
    pub async fn submit_request(&self, input: SubmitRequestInput) -> Result<SubmittedRequest, ServiceError> {
        let SubmitRequestInput { user_id: Some(user_id), token: Some(token), service_id: Some(service_id), details: Some(details) } = input else {
            return Err(ServiceError::Validation("missing required parameters".into()));
        };

        let user = self.auth.authenticate(Some(user_id), Some(&token)).await?;

        if !self.catalog.service_exists(service_id).await? {
            return Err(ServiceError::not_found("service"));
        }

        let request_id = self.catalog.create_request(NewServiceRequest { user_id: user.id, service_id, details }).await?;
        info!(event = "service_request_created", request_id, user_id = user.id, service_id, "service request created");
        Ok(SubmittedRequest { request_id })
    }
}
