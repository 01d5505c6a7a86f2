// src/config.rs
use std::env;
use thiserror::Error;
use url::Url;

#[derive(Clone, Debug)]
pub struct AppConfig {
    app_env: String,
    database_url: String,
    database_max_connections: u32,
    listen_addr: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_app_env() -> String {
    "development".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_max_connections() -> u32 {
    16
}

const POSTGRES_KEYS: [&str; 5] = [
    "POSTGRES_HOST",
    "POSTGRES_EXTERNAL_PORT",
    "POSTGRES_USER",
    "POSTGRES_PASSWORD",
    "POSTGRES_DB",
];

impl AppConfig {
    /// Build configuration from environment variables, loading `.env` first
    /// when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let app_env = get("APP_ENV").unwrap_or_else(default_app_env);
        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let database_url = match get("DATABASE_URL") {
            Some(url) => url,
            None => postgres_url_from_parts(&get)?,
        };

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer: {raw}"
                    ))
                })?,
            None => default_max_connections(),
        };

        Ok(Self {
            app_env,
            database_url,
            database_max_connections,
            listen_addr,
        })
    }

    pub fn app_env(&self) -> &str {
        &self.app_env
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }
}

fn postgres_url_from_parts<G>(get: &G) -> Result<String, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let mut parts = Vec::with_capacity(POSTGRES_KEYS.len());
    for key in POSTGRES_KEYS {
        parts.push(get(key).ok_or(ConfigError::Missing(key))?);
    }
    let [host, port, user, password, name]: [String; 5] = parts
        .try_into()
        .map_err(|_| ConfigError::Invalid("database connection parameters are incomplete".into()))?;

    let port_number = port
        .parse::<u32>()
        .map_err(|_| ConfigError::Invalid(format!("invalid database port: {port}")))?;
    if !(1..=65535).contains(&port_number) {
        return Err(ConfigError::Invalid(format!(
            "database port must be between 1 and 65535: {port_number}"
        )));
    }

    // Credentials and database name are percent-encoded by the setters.
    let mut url = Url::parse(&format!("postgres://{host}:{port_number}"))
        .map_err(|err| ConfigError::Invalid(format!("invalid database host {host}: {err}")))?;
    url.set_username(&user)
        .map_err(|()| ConfigError::Invalid("database user cannot be set".into()))?;
    url.set_password(Some(&password))
        .map_err(|()| ConfigError::Invalid("database password cannot be set".into()))?;
    url.set_path(&format!("/{name}"));

    Ok(url.into())
}
