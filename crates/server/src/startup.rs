use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::reporting::{ErrorReporter, TracingReporter};
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::{AiUpstream, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load config.toml, falling back to environment variables when it is absent
pub fn load_config() -> Result<AppConfig, StartupError> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(file_err) => {
            warn!(error = %file_err, "config file unusable; falling back to environment");
            AppConfig::from_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))
        }
    }
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Connect, migrate and bootstrap the catalog, then assemble the state.
pub async fn build_state(cfg: &AppConfig, reporter: Arc<dyn ErrorReporter>) -> Result<ServerState, StartupError> {
    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await?;
    models::db::test_connection(&db).await?;

    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Migration(e.to_string()))?;
        info!(event = "migrations_applied", "database migrations applied");
    }

    let state = ServerState::from_db(db, AiUpstream::new(cfg.ai.endpoint.clone()), reporter);

    // 目录初始化是显式的一次性步骤：在开始监听之前执行，失败只记录不退出
    state.catalog.bootstrap_or_report(state.reporter.as_ref()).await;
    Ok(state)
}

/// Public entry: build the app and run the HTTP server. The caller owns
/// `.env` loading and logging setup.
pub async fn run() -> anyhow::Result<()> {
    let cfg = load_config()?;
    let reporter: Arc<dyn ErrorReporter> = Arc::new(TracingReporter::new("server"));
    let state = build_state(&cfg, reporter).await?;

    // Build router
    let app: Router = routes::build_router(state, build_cors());

    // Bind and serve
    let addr = bind_addr(&cfg)?;
    info!(%addr, ai_endpoint = %cfg.ai.endpoint, "starting server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
