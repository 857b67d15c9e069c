//! Application state for ventas-server

use sqlx::SqlitePool;

use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Configured login email (the only identity the guard accepts)
    pub login_email: String,
    /// Configured login secret
    pub login_secret: String,
    /// JWT signing secret
    pub jwt_secret: String,
    /// Directory served under /static
    pub static_dir: String,
}

impl AppState {
    /// Create a new AppState: connect the pool and apply migrations
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = SqlitePool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self {
            pool,
            login_email: config.login_email.clone(),
            login_secret: config.login_secret.clone(),
            jwt_secret: config.jwt_secret.clone(),
            static_dir: config.static_dir.clone(),
        })
    }
}

#[cfg(test)]
impl AppState {
    /// In-memory state for route tests. A single pooled connection keeps
    /// every query on the same `:memory:` database.
    pub(crate) async fn for_tests() -> Self {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("migrations");

        Self {
            pool,
            login_email: "admin@ventas.dev".into(),
            login_secret: "secreto123".into(),
            jwt_secret: "test-signing-secret".into(),
            static_dir: "static".into(),
        }
    }
}
