//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration
///
/// Loaded once at startup; immutable afterwards. The credential pair and
/// the signing secret have no defaults: the process refuses to start
/// without them.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Directory served under /static
    pub static_dir: String,
    /// The single valid login email
    pub login_email: String,
    /// The single valid login secret
    pub login_secret: String,
    /// JWT signing secret
    pub jwt_secret: String,
}

impl Config {
    /// Require an env var: must be set and non-empty.
    fn require(name: &str) -> Result<String, BoxError> {
        let val = std::env::var(name).map_err(|_| format!("{name} must be set"))?;
        if val.is_empty() {
            return Err(format!("{name} must not be empty").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://ventas.sqlite?mode=rwc".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into()),
            login_email: Self::require("LOGIN_EMAIL")?,
            login_secret: Self::require("LOGIN_SECRET")?,
            jwt_secret: Self::require("JWT_SECRET")?,
        })
    }
}
