/// Server configuration
use crate::error::{Result, ServerError};
use crate::services::auth::{MAX_HASH_COST, MIN_HASH_COST};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    /// HMAC signing key for tokens. Required; there is no built-in fallback.
    #[serde(default)]
    pub jwt_secret: String,

    #[serde(default = "default_token_ttl_secs")]
    pub token_ttl_secs: u64,

    /// bcrypt cost factor
    #[serde(default = "default_hash_cost")]
    pub hash_cost: u32,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Sources, lowest priority first: defaults, the TOML file (`path`, or
    /// `config.toml` when present), `JUKEBOX_*` variables, then the plain
    /// `PORT`, `JWT_SECRET` and `DATABASE_URL` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from("config.toml");
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // e.g. JUKEBOX_SERVER__PORT, JUKEBOX_AUTH__JWT_SECRET
        settings = settings.add_source(
            config::Environment::with_prefix("JUKEBOX")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let port = match std::env::var("PORT") {
            Ok(raw) => Some(
                raw.parse::<u16>()
                    .map_err(|_| ServerError::Config(format!("Invalid PORT: {}", raw)))?,
            ),
            Err(_) => None,
        };

        settings = settings
            .set_override_option("server.port", port.map(i64::from))
            .and_then(|s| {
                s.set_override_option("auth.jwt_secret", std::env::var("JWT_SECRET").ok())
            })
            .and_then(|s| {
                s.set_override_option("storage.database_url", std::env::var("DATABASE_URL").ok())
            })
            .map_err(|e| ServerError::Config(e.to_string()))?;

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.is_empty() {
            return Err(ServerError::Config(
                "JWT secret is required (set JWT_SECRET)".to_string(),
            ));
        }

        if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&self.auth.hash_cost) {
            return Err(ServerError::Config(format!(
                "auth.hash_cost must be between {} and {}",
                MIN_HASH_COST, MAX_HASH_COST
            )));
        }

        if self.auth.token_ttl_secs == 0 {
            return Err(ServerError::Config(
                "auth.token_ttl_secs must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://jukebox.db".to_string()
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        jwt_secret: String::new(),
        token_ttl_secs: default_token_ttl_secs(),
        hash_cost: default_hash_cost(),
    }
}

fn default_token_ttl_secs() -> u64 {
    3600
}

fn default_hash_cost() -> u32 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            auth: default_auth(),
        }
    }
}
