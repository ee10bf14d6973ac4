//! Database test utilities and shared infrastructure

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};
use uuid::Uuid;

const DB_USER: &str = "maanushi_test";
const DB_PASSWORD: &str = "maanushi_test_password";

/// Only names we generate ourselves are ever interpolated into DDL.
fn is_test_database_name(name: &str) -> bool {
    name.starts_with("maanushi_test_")
        && name.len() <= 63
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

async fn init_postgres_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(DB_USER)
        .with_password(DB_PASSWORD)
        .with_db_name("maanushi_test")
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

/// One container for the whole test binary.
static POSTGRES_CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

/// Databases waiting to be dropped.
static CLEANUP_SENDER: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

async fn init_cleanup_task() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(db_name) = receiver.recv().await {
            // Pools may still be closing; a leftover database dies with the container.
            let _ = drop_database(&db_name).await;
        }
    });

    sender
}

async fn server_url(db_name: &str) -> String {
    let container = POSTGRES_CONTAINER
        .get_or_init(init_postgres_container)
        .await;

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{DB_USER}:{DB_PASSWORD}@{host}:{port}/{db_name}")
}

async fn drop_database(db_name: &str) -> Result<(), sqlx::Error> {
    if !is_test_database_name(db_name) {
        return Ok(());
    }

    let mut conn = PgConnection::connect(&server_url("postgres").await).await?;

    sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\""))
        .execute(&mut conn)
        .await?;

    conn.close().await
}

/// A freshly migrated database inside the shared container.
///
/// Every test gets its own database, so services commit normally and tests
/// never see each other's rows. The database is dropped in the background
/// once the `TestDb` goes out of scope.
#[derive(Debug)]
pub(crate) struct TestDb {
    pool: PgPool,
    name: String,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = CLEANUP_SENDER.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

impl TestDb {
    pub(crate) async fn new() -> Self {
        let _cleanup_sender = CLEANUP_SENDER.get_or_init(init_cleanup_task).await;

        let name = format!("maanushi_test_{}", Uuid::now_v7().simple());

        let mut conn = PgConnection::connect(&server_url("postgres").await)
            .await
            .expect("Failed to connect to postgres database");

        sqlx::query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut conn)
            .await
            .expect("Failed to create test database");

        conn.close()
            .await
            .expect("Failed to close admin connection");

        let pool = PgPool::connect(&server_url(&name).await)
            .await
            .expect("Failed to create pool for database");

        sqlx::migrate!("../../migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations on database");

        Self { pool, name }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_generated_names_are_accepted() {
        assert!(is_test_database_name("maanushi_test_0190f6e2a1b27c3d"));
        assert!(!is_test_database_name("postgres"));
        assert!(!is_test_database_name("maanushi_test_\"; DROP"));
        assert!(!is_test_database_name(&format!("maanushi_test_{}", "a".repeat(60))));
    }

    #[tokio::test]
    async fn migrations_seed_reference_tables() {
        let test_db = TestDb::new().await;

        let statuses: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_statuses")
            .fetch_one(test_db.pool())
            .await
            .expect("Failed to count order statuses");

        let modes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM payment_modes")
            .fetch_one(test_db.pool())
            .await
            .expect("Failed to count payment modes");

        assert_eq!(statuses, 7);
        assert_eq!(modes, 3);
    }
}
