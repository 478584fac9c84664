//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// How request failures are reported to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ErrorStyle {
    /// Status-coded responses with a JSON error envelope
    #[default]
    Typed,
    /// HTTP 200 with the plain-text messages older clients look for
    Legacy,
}

/// How uploaded files are named on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UploadNaming {
    /// Random collision-resistant key, keeping the client's extension
    #[default]
    Generated,
    /// The client's filename; a later upload with the same name replaces it
    Original,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub error_style: ErrorStyle,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Upload storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,
    #[serde(default)]
    pub naming: UploadNaming,
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size_mb: u32,
}

impl StorageConfig {
    /// Maximum accepted request body for uploads, in bytes
    #[must_use]
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_size_mb as usize * 1024 * 1024
    }

    /// Directory name used as the prefix of returned upload paths
    #[must_use]
    pub fn public_prefix(&self) -> String {
        public_prefix_of(&self.upload_dir)
    }
}

fn public_prefix_of(dir: &Path) -> String {
    dir.file_name()
        .map_or_else(default_public_prefix, |name| name.to_string_lossy().into_owned())
}

// Default value functions
fn default_app_name() -> String {
    "catalog-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_database_url() -> String {
    "sqlite://database.sqlite3".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("upload")
}

fn default_public_prefix() -> String {
    "upload".to_string()
}

fn default_max_upload_size() -> u32 {
    10
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Every variable is optional; unparsable values are reported instead of
    /// silently replaced by defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: match lookup("APP_ENV") {
                    None => Environment::default(),
                    Some(s) => match s.to_lowercase().as_str() {
                        "production" => Environment::Production,
                        "staging" => Environment::Staging,
                        "development" => Environment::Development,
                        _ => return Err(ConfigError::InvalidValue("APP_ENV", s)),
                    },
                },
            },
            api: ServerConfig {
                host: lookup("HOST").unwrap_or_else(default_host),
                port: parse_var(&lookup, "PORT")?.unwrap_or_else(default_port),
                error_style: match lookup("ERROR_STYLE") {
                    None => ErrorStyle::default(),
                    Some(s) => match s.to_lowercase().as_str() {
                        "typed" => ErrorStyle::Typed,
                        "legacy" => ErrorStyle::Legacy,
                        _ => return Err(ConfigError::InvalidValue("ERROR_STYLE", s)),
                    },
                },
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").unwrap_or_else(default_database_url),
                max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|origin| !origin.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            storage: StorageConfig {
                upload_dir: upload_dir(&lookup)?,
                naming: match lookup("UPLOAD_NAMING") {
                    None => UploadNaming::default(),
                    Some(s) => match s.to_lowercase().as_str() {
                        "generated" => UploadNaming::Generated,
                        "original" => UploadNaming::Original,
                        _ => return Err(ConfigError::InvalidValue("UPLOAD_NAMING", s)),
                    },
                },
                max_upload_size_mb: parse_var(&lookup, "MAX_UPLOAD_SIZE_MB")?
                    .unwrap_or_else(default_max_upload_size),
            },
        })
    }
}

/// First path segments already taken by API routes
const RESERVED_PREFIXES: &[&str] = &["products", "banners", "image", "health"];

/// Upload directory whose name can be mounted as a static path prefix
fn upload_dir<F>(lookup: &F) -> Result<PathBuf, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup("UPLOAD_DIR") else {
        return Ok(default_upload_dir());
    };
    let prefix = public_prefix_of(Path::new(&raw));
    if RESERVED_PREFIXES.contains(&prefix.as_str()) || prefix.starts_with([':', '*']) {
        return Err(ConfigError::InvalidValue("UPLOAD_DIR", raw));
    }
    Ok(PathBuf::from(raw))
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, raw))
        })
        .transpose()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
