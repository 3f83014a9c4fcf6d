use std::sync::Arc;

use common::reporting::ErrorReporter;
use sea_orm::DatabaseConnection;
use service::auth::repo::seaorm::SeaOrmUserRepository;
use service::catalog::{repo::seaorm::SeaOrmCatalogRepository, CatalogService};

/// Upstream AI service used by the health proxy.
#[derive(Clone)]
pub struct AiUpstream {
    pub client: reqwest::Client,
    /// Base URL without trailing slash
    pub endpoint: String,
}

impl AiUpstream {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into().trim_end_matches('/').to_string();
        Self { client: reqwest::Client::new(), endpoint }
    }
}

#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<CatalogService>,
    pub reporter: Arc<dyn ErrorReporter>,
    pub ai: AiUpstream,
}

impl ServerState {
    /// Wire the SeaORM-backed repositories onto one connection pool.
    pub fn from_db(db: DatabaseConnection, ai: AiUpstream, reporter: Arc<dyn ErrorReporter>) -> Self {
        let catalog_repo = Arc::new(SeaOrmCatalogRepository { db: db.clone() });
        let user_repo = Arc::new(SeaOrmUserRepository { db });
        Self {
            catalog: Arc::new(CatalogService::new(catalog_repo, user_repo)),
            reporter,
            ai,
        }
    }
}
