use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MockError, Result};

pub const CONFIG_FILE_NAMES: [&str; 2] = ["custom-config.toml", "config.toml"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 单个请求体允许读取的最大字节数
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_body_bytes: 16 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_dir: String,
    /// When set, a request whose record cannot be written fails with 500
    /// instead of being served without a record.
    pub strict: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "log".to_string(),
            strict: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allow_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            // VS Code webview origin
            allow_origin: "vscode-file://vscode-app".to_string(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                let settings = Self::from_toml(&content)?;
                tracing::info!("Loaded configuration from {}", path);
                Ok(settings)
            }
            None => {
                tracing::info!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MockError::Config(e.to_string()))
    }

    fn find_config_file() -> Option<&'static str> {
        CONFIG_FILE_NAMES
            .iter()
            .copied()
            .find(|name| Path::new(name).exists())
    }
}
