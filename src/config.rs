use std::collections::HashMap;
use std::convert::Infallible;
use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The only environment name that silences the local logger.
pub const PRODUCTION: &str = "production";

const DEFAULT_APP_ENV: &str = "development";
const DEFAULT_LOGIN_DELAY_MS: u64 = 250;
const DEFAULT_DEMO_USERNAME: &str = "demo";
const DEFAULT_DEMO_PASSWORD: &str = "demo";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_LEVEL: &str = "info";

// --- ERRORS ---

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
    EnvFile(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => {
                write!(f, "Config error: {} must be valid (got '{}')", key, value)
            }
            ConfigError::EnvFile(msg) => write!(f, "Config error: cannot read env file: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

// --- ENVIRONMENT FLAG ---

/// Deployment environment name, e.g. `development` or `production`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEnvironment(String);

impl AppEnvironment {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn production() -> Self {
        Self::new(PRODUCTION)
    }

    pub fn development() -> Self {
        Self::new(DEFAULT_APP_ENV)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive match against `"production"`.
    pub fn is_production(&self) -> bool {
        self.0 == PRODUCTION
    }
}

impl Default for AppEnvironment {
    fn default() -> Self {
        Self::development()
    }
}

impl FromStr for AppEnvironment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// --- CONFIG AGGREGATOR ---

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
}

impl Config {
    /// `.env` (if present) merged into the process environment, then read from it.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; missing keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            app: AppConfig::load(&lookup)?,
            server: ServerConfig::load(&lookup)?,
        })
    }

    /// Reads only the given `.env` file. The process environment is neither read nor modified.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let entries = dotenv::from_path_iter(path.as_ref())
            .map_err(|e| ConfigError::EnvFile(e.to_string()))?;

        let mut vars = HashMap::new();
        for entry in entries {
            let (key, value) = entry.map_err(|e| ConfigError::EnvFile(e.to_string()))?;
            vars.insert(key, value);
        }

        Self::from_lookup(|key| vars.get(key).cloned())
    }
}

// --- MODULES ---

// APP
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub login_delay_ms: u64,
    pub demo_username: String,
    pub demo_password: String,
}

impl AppConfig {
    fn load<F: Fn(&str) -> Option<String>>(lookup: &F) -> Result<Self, ConfigError> {
        Ok(Self {
            environment:    get_env(lookup, "APP_ENV", AppEnvironment::development())?,
            login_delay_ms: get_env(lookup, "LOGIN_DELAY_MS", DEFAULT_LOGIN_DELAY_MS)?,
            demo_username:  get_env(lookup, "DEMO_USERNAME", DEFAULT_DEMO_USERNAME.to_string())?,
            demo_password:  get_env(lookup, "DEMO_PASSWORD", DEFAULT_DEMO_PASSWORD.to_string())?,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: AppEnvironment::development(),
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
            demo_username: DEFAULT_DEMO_USERNAME.to_string(),
            demo_password: DEFAULT_DEMO_PASSWORD.to_string(),
        }
    }
}

// SERVER
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl ServerConfig {
    fn load<F: Fn(&str) -> Option<String>>(lookup: &F) -> Result<Self, ConfigError> {
        Ok(Self {
            host:      get_env(lookup, "SERVER_HOST", DEFAULT_HOST.to_string())?,
            port:      get_env(lookup, "SERVER_PORT", DEFAULT_PORT)?,
            log_level: get_env(lookup, "WEBKIT_LOG", DEFAULT_LOG_LEVEL.to_string())?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

// --- PRIVATE HELPER ---

fn get_env<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw.clone() }),
        None => Ok(default),
    }
}
