use std::env;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use http::HeaderValue;
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{
    DEFAULT_JWT_COOKIE_NAME, DEFAULT_TOKEN_TTL_SECONDS, SETTINGS_FILE,
    env::{DATABASE_URL_ENV_VAR, JWT_SECRET_ENV_VAR, PORT_ENV_VAR, SETTINGS_ENV_PREFIX},
    prod,
};
use crate::auth_validation::JwtAuthConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct AccountServiceSettings {
    pub application: ApplicationSettings,
    pub session: SessionSettings,
    pub postgres: Option<PostgresSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    pub assets_dir: Option<String>,
    pub allowed_origins: Vec<String>,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn allowed_origins(&self) -> AllowedOrigins {
        AllowedOrigins::new(&self.allowed_origins)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub secret: Secret<String>,
    pub cookie_name: String,
    pub time_to_live: i64,
    pub secure_cookie: bool,
}

impl From<&SessionSettings> for JwtAuthConfig {
    fn from(session: &SessionSettings) -> Self {
        JwtAuthConfig {
            jwt_cookie_name: session.cookie_name.clone(),
            jwt_secret: session.secret.clone(),
            token_ttl_in_seconds: session.time_to_live,
            secure_cookie: session.secure_cookie,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

impl AccountServiceSettings {
    /// Load settings from defaults, the optional settings file, `ACCOUNTS_*`
    /// variables and the well-known `JWT_SECRET`/`DATABASE_URL`/`PORT`
    /// variables, in increasing priority. A `.env` file is honoured if present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::builder()?
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(
                Environment::with_prefix(SETTINGS_ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("application.allowed_origins")
                    .try_parsing(true),
            )
            .set_override_option("session.secret", env::var(JWT_SECRET_ENV_VAR).ok())?
            .set_override_option("postgres.url", env::var(DATABASE_URL_ENV_VAR).ok())?
            .set_override_option("application.port", env::var(PORT_ENV_VAR).ok())?
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.session.time_to_live <= 0 {
            return Err(ConfigError::Message(format!(
                "session.time_to_live must be a positive number of seconds, got {}",
                self.session.time_to_live
            )));
        }
        Ok(self)
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("application.host", prod::APP_HOST)?
            .set_default("application.port", prod::APP_PORT)?
            .set_default("application.allowed_origins", vec![prod::ALLOWED_ORIGIN])?
            .set_default("session.cookie_name", DEFAULT_JWT_COOKIE_NAME)?
            .set_default("session.time_to_live", DEFAULT_TOKEN_TTL_SECONDS)?
            .set_default("session.secure_cookie", true)
    }
}

/// Origins allowed to make credentialed cross-origin requests.
#[derive(Debug, Clone, Default)]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    pub fn new<S: AsRef<str>>(origins: &[S]) -> Self {
        let origins = origins
            .iter()
            .filter_map(|origin| {
                HeaderValue::from_str(origin.as_ref().trim())
                    .inspect_err(|_| {
                        tracing::warn!(origin = origin.as_ref(), "skipping invalid origin")
                    })
                    .ok()
            })
            .collect();
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.contains(origin)
    }
}
