use dotenvy::dotenv;
use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Password registration/login with locally signed tokens.
    Local,
    /// PKCE code exchange plus per-request introspection against an
    /// external identity provider.
    Delegated,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub jwt_secret: String,
    pub jwt_expiration_days: i64,
    pub cors_origins: Vec<String>,
    pub auth_mode: AuthMode,
    pub provider_domain: Option<String>,
    pub provider_client_id: Option<String>,
    pub provider_timeout_secs: u64,
}

impl Config {
    pub fn new() -> Self {
        CONFIG.clone()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
    let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
    let jwt_expiration_days = std::env::var("JWT_EXPIRATION_DAYS")
        .unwrap_or_else(|_| "7".to_string())
        .parse()
        .expect("JWT_EXPIRATION_DAYS must be a valid i64");

    let cors_origins = std::env::var("CORS_ORIGINS")
        .unwrap_or_else(|_| "*".to_string())
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let auth_mode = match std::env::var("AUTH_MODE").as_deref() {
        Ok("delegated") => AuthMode::Delegated,
        _ => AuthMode::Local,
    };

    let provider_timeout_secs = std::env::var("PROVIDER_TIMEOUT_SECS")
        .unwrap_or_else(|_| "10".to_string())
        .parse()
        .expect("PROVIDER_TIMEOUT_SECS must be a valid u64");

    tracing::info!("Config loaded");

    Config {
        database_url,
        bind_addr,
        jwt_secret,
        jwt_expiration_days,
        cors_origins,
        auth_mode,
        provider_domain: std::env::var("PROVIDER_DOMAIN").ok(),
        provider_client_id: std::env::var("PROVIDER_CLIENT_ID").ok(),
        provider_timeout_secs,
    }
});
