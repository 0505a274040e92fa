use crate::config::toml_config::TomlConfig;
use crate::config::{
    BackendConfig, DEFAULT_ALLOWED_ORIGIN, DEFAULT_HOST, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT,
};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Loads `.env` (or the given file) into the process environment before the
/// clap `env` fallbacks are read. Variables already set are not overridden.
/// Returns the file that was loaded, if any.
pub fn load_env_file(path: Option<&Path>) -> Option<PathBuf> {
    match path {
        Some(path) => dotenvy::from_path(path).ok().map(|_| path.to_path_buf()),
        None => dotenvy::dotenv().ok(),
    }
}

#[derive(Clone, Parser)]
#[command(name = "kaios-terminal-backend")]
#[command(about = "Authenticated terminal backend: ping, brief and a tiny command dispatcher")]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, env = "API_TOKEN", default_value = "", hide_env_values = true)]
    pub api_token: String,

    #[arg(long, env = "ALLOWED_ORIGIN", default_value = DEFAULT_ALLOWED_ORIGIN)]
    pub allowed_origin: String,

    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    #[arg(
        long,
        short = 'c',
        help = "Read settings from a TOML file instead of flags and environment"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ServerArgs {
    /// 有指定 --config 時以 TOML 檔為準，否則使用旗標與環境變數
    pub fn load_config(&self) -> Result<BackendConfig> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                let toml = TomlConfig::from_file(path)?;
                toml.validate()?;
                Ok(BackendConfig::from_provider(&toml))
            }
            None => Ok(BackendConfig::from_provider(self)),
        }
    }
}

impl ConfigProvider for ServerArgs {
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
