#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "*";
pub const DEFAULT_MAX_BODY_BYTES: usize = 32 * 1024;
pub const MAX_BODY_BYTES_CEILING: usize = 10 * 1024 * 1024;

/// Settings read once at startup and shared read-only with the HTTP layer.
#[derive(Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub host: String,
    pub port: u16,
    pub api_token: String,
    pub allowed_origin: String,
    pub max_body_bytes: usize,
}

impl BackendConfig {
    pub fn from_provider<P: ConfigProvider + ?Sized>(provider: &P) -> Self {
        Self {
            host: provider.host().to_string(),
            port: provider.port(),
            api_token: provider.api_token().to_string(),
            allowed_origin: provider.allowed_origin().to_string(),
            max_body_bytes: provider.max_body_bytes(),
        }
    }

    pub fn with_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = api_token.into();
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Without a token every request is rejected.
    pub fn auth_enabled(&self) -> bool {
        !self.api_token.is_empty()
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_token: String::new(),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = if self.api_token.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("BackendConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_token", &token)
            .field("allowed_origin", &self.allowed_origin)
            .field("max_body_bytes", &self.max_body_bytes)
            .finish()
    }
}

impl ConfigProvider for BackendConfig {
    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn api_token(&self) -> &str {
        &self.api_token
    }

    fn allowed_origin(&self) -> &str {
        &self.allowed_origin
    }

    fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }
}

impl Validate for BackendConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("host", &self.host)?;
        validation::validate_origin("allowed_origin", &self.allowed_origin)?;
        validation::validate_range(
            "max_body_bytes",
            self.max_body_bytes,
            1,
            MAX_BODY_BYTES_CEILING,
        )?;
        Ok(())
    }
}
