use serde::Deserialize;
use std::env;
use std::path::Path;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "config/default.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub web: WebConfig,
    /// Root of the REST backend, e.g. `http://localhost:3001/api`.
    pub api_base_url: String,
    pub log_level: String,
    pub templates_path: String,
    pub static_path: String,
    /// Display name shown in the header until a login flow exists.
    pub current_user: String,
}

/// Values taken from the process environment. `None` keeps the TOML default.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub api_base_url: Option<String>,
    pub log_level: Option<String>,
    pub templates_path: Option<String>,
    pub current_user: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
}

impl EnvOverrides {
    pub fn from_process_env() -> Self {
        let var = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());
        EnvOverrides {
            api_base_url: var("API_BASE_URL"),
            log_level: var("LOG_LEVEL"),
            templates_path: var("TEMPLATES_PATH"),
            current_user: var("CURRENT_USER"),
            host: var("HOST"),
            port: var("PORT"),
        }
    }
}

impl Config {
    /// Loads the optional `.env` file, then layers the environment over
    /// `config/default.toml`.
    pub fn from_env(env_path: Option<&Path>) -> Result<Self, config::ConfigError> {
        match env_path {
            Some(path) => {
                dotenvy::from_path(path).map_err(|e| {
                    config::ConfigError::Message(format!(
                        "FATAL: Failed to load .env file from '{}'. Error: {}",
                        path.display(),
                        e
                    ))
                })?;
            }
            None => {
                dotenvy::dotenv().ok();
            }
        }

        Self::build(
            config::File::new(DEFAULT_CONFIG_FILE, config::FileFormat::Toml),
            EnvOverrides::from_process_env(),
        )
    }

    pub fn build<S>(defaults: S, overrides: EnvOverrides) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(url) = overrides.api_base_url {
            builder = builder.set_override("api_base_url", url)?;
        }
        if let Some(level) = overrides.log_level {
            builder = builder.set_override("log_level", level)?;
        }
        if let Some(path) = overrides.templates_path {
            builder = builder.set_override("templates_path", path)?;
        }
        if let Some(user) = overrides.current_user {
            builder = builder.set_override("current_user", user)?;
        }
        if let Some(host) = overrides.host {
            builder = builder.set_override("web.host", host)?;
        }
        if let Some(port) = overrides.port {
            let port: i64 = port.trim().parse().map_err(|_| {
                config::ConfigError::Message(format!("FATAL: 'PORT' must be a number, got '{}'.", port))
            })?;
            builder = builder.set_override("web.port", port)?;
        }

        let config: Config = builder.build()?.try_deserialize()?;
        validate_api_base_url(&config.api_base_url)?;
        Ok(config)
    }

    /// Glob Tera loads page templates from.
    pub fn templates_glob(&self) -> String {
        format!("{}/**/*.html", self.templates_path.trim_end_matches('/'))
    }
}

fn validate_api_base_url(raw: &str) -> Result<(), config::ConfigError> {
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base() => Ok(()),
        _ => Err(config::ConfigError::Message(format!(
            "FATAL: 'API_BASE_URL' must be an absolute http(s) URL, got '{}'.",
            raw
        ))),
    }
}
