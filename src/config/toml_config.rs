use crate::config::{DEFAULT_ALLOWED_ORIGIN, DEFAULT_HOST, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT};
use crate::core::ConfigProvider;
use crate::utils::error::{BackendError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File form of the backend settings:
///
/// ```toml
/// [server]
/// port = 10000
///
/// [auth]
/// api_token = "${API_TOKEN}"
///
/// [cors]
/// allowed_origin = "https://terminal.example.com"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,
    pub auth: AuthSection,
    #[serde(default)]
    pub cors: CorsSection,
    #[serde(default)]
    pub limits: LimitsSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSection {
    pub api_token: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorsSection {
    pub allowed_origin: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitsSection {
    pub max_body_bytes: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BackendError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BackendError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_TOKEN})；找不到的變數直接回報錯誤
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BackendError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        if let Some(missing) = re
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .find(|name| std::env::var(name).is_err())
        {
            return Err(BackendError::MissingConfigError { field: missing });
        }

        let result = re.replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        Ok(result.into_owned())
    }
}

impl ConfigProvider for TomlConfig {
    fn host(&self) -> &str {
        self.server.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    fn port(&self) -> u16 {
        self.server.port.unwrap_or(DEFAULT_PORT)
    }

    fn api_token(&self) -> &str {
        &self.auth.api_token
    }

    fn allowed_origin(&self) -> &str {
        self.cors
            .allowed_origin
            .as_deref()
            .unwrap_or(DEFAULT_ALLOWED_ORIGIN)
    }

    fn max_body_bytes(&self) -> usize {
        self.limits.max_body_bytes.unwrap_or(DEFAULT_MAX_BODY_BYTES)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("server.host", self.host())?;
        validation::validate_origin("cors.allowed_origin", self.allowed_origin())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_minimal_toml_config() {
        let toml_content = r#"
[auth]
api_token = "t0k3n"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api_token(), "t0k3n");
        assert_eq!(config.port(), 10000);
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.allowed_origin(), "*");
        assert_eq!(config.max_body_bytes(), 32 * 1024);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("KAIOS_TEST_TOKEN_SUBST", "from-env");

        let toml_content = r#"
[server]
port = 8081

[auth]
api_token = "${KAIOS_TEST_TOKEN_SUBST}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_token(), "from-env");
        assert_eq!(config.port(), 8081);

        std::env::remove_var("KAIOS_TEST_TOKEN_SUBST");
    }

    #[test]
    fn test_unresolved_env_var_is_an_error() {
        let toml_content = r#"
[auth]
api_token = "${KAIOS_TEST_TOKEN_NEVER_SET}"
"#;

        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(
            err,
            BackendError::MissingConfigError { ref field } if field == "KAIOS_TEST_TOKEN_NEVER_SET"
        ));
    }

    #[test]
    fn test_missing_auth_section_fails_to_parse() {
        let toml_content = r#"
[server]
port = 8081
"#;
        assert!(TomlConfig::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[auth]
api_token = "x"

[cors]
allowed_origin = "terminal.example.com"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 9000

[auth]
api_token = "file-token"

[limits]
max_body_bytes = 1024
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 9000);
        assert_eq!(config.max_body_bytes(), 1024);
    }
}
