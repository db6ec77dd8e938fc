use std::fmt;
use std::sync::Arc;
use crate::config::errors::SettingsError;
use crate::config::EnvironmentProvider;

const DEFAULT_DATABASE_URL: &str = "sqlite://polygons.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_CORS_ORIGIN: &str = "*";

/// Bootstrap settings for infrastructure configuration
///
/// Every value comes from an environment variable with a default; nothing is
/// read from the database, so these can be loaded before it is opened.
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    public_url: String,
    cors_origin: String,
}

impl BootstrapSettings {
    /// Load bootstrap settings through the given environment provider
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<Self, SettingsError> {
        let load = |name: &str, default: &str| env_provider.get_var(name).unwrap_or_else(|| default.to_string());

        let database_url = load("DATABASE_URL", DEFAULT_DATABASE_URL);
        require_non_empty("DATABASE_URL", &database_url)?;

        let server_host = load("HOST", DEFAULT_HOST);
        require_non_empty("HOST", &server_host)?;

        let server_port = parse_port(&load("PORT", DEFAULT_PORT), "PORT")?;

        let public_url = load("PUBLIC_URL", &format!("http://localhost:{}", server_port));
        let public_url = public_url.trim_end_matches('/').to_string();
        require_non_empty("PUBLIC_URL", &public_url)?;

        let cors_origin = load("CORS_ORIGIN", DEFAULT_CORS_ORIGIN);
        require_non_empty("CORS_ORIGIN", &cors_origin)?;

        Ok(Self {
            database_url,
            server_host,
            server_port,
            public_url,
            cors_origin,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, SettingsError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Base URL advertised in the OpenAPI document, without trailing slash
    pub fn public_url(&self) -> &str {
        &self.public_url
    }

    pub fn cors_origin(&self) -> &str {
        &self.cors_origin
    }
}

fn require_non_empty(setting_name: &str, value: &str) -> Result<(), SettingsError> {
    if value.trim().is_empty() {
        return Err(SettingsError::InvalidSetting {
            setting_name: setting_name.to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

fn parse_port(value: &str, setting_name: &str) -> Result<u16, SettingsError> {
    let port = value.trim().parse::<u16>().map_err(|e| SettingsError::ParseError {
        setting_name: setting_name.to_string(),
        error: format!("Expected port number (1-65535), got '{}': {}", value, e),
    })?;

    if port == 0 {
        return Err(SettingsError::InvalidSetting {
            setting_name: setting_name.to_string(),
            reason: "Port number must be between 1 and 65535".to_string(),
        });
    }

    Ok(port)
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("public_url", &self.public_url)
            .field("cors_origin", &self.cors_origin)
            .finish()
    }
}
