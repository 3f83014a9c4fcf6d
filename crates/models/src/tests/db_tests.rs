use crate::db::{connect_with_config, test_connection, DatabaseConfig};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use std::time::Duration;

use super::setup_test_db;

/// Test basic database connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let db = connect_with_config(&DatabaseConfig::sqlite_memory()).await?;
    test_connection(&db).await?;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 as test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);
    Ok(())
}

/// In-memory URLs are clamped to a single connection so every query sees the same database
#[tokio::test]
async fn test_memory_pool_is_single_connection() -> Result<()> {
    let mut config = DatabaseConfig::sqlite_memory();
    config.max_connections = 8;
    config.min_connections = 2;
    config.connect_timeout = Duration::from_secs(5);
    let db = connect_with_config(&config).await?;
    migration::Migrator::up(&db, None).await?;

    let stmt = Statement::from_string(
        DatabaseBackend::Sqlite,
        "SELECT count(*) AS n FROM sqlite_master WHERE type = 'table' AND name = 'service'".to_string(),
    );
    let row = db.query_one(stmt).await?.expect("one row");
    let n: i32 = row.try_get("", "n")?;
    assert_eq!(n, 1);
    Ok(())
}

#[tokio::test]
async fn test_migrations_up_down_up() -> Result<()> {
    let db = setup_test_db().await?;
    migration::Migrator::down(&db, None).await?;
    migration::Migrator::up(&db, None).await?;
    let pending = migration::Migrator::get_pending_migrations(&db).await?;
    assert!(pending.is_empty());
    Ok(())
}

#[test]
fn test_config_conversion_from_configs_crate() {
    let src = configs::DatabaseConfig {
        url: "postgres://localhost/db".into(),
        connect_timeout_secs: 7,
        acquire_timeout_secs: 9,
        ..Default::default()
    };
    let cfg = DatabaseConfig::from(&src);
    assert_eq!(cfg.url, "postgres://localhost/db");
    assert_eq!(cfg.connect_timeout, Duration::from_secs(7));
    assert_eq!(cfg.acquire_timeout, Duration::from_secs(9));
    assert_eq!(cfg.max_connections, src.max_connections);
}
