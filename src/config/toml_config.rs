use crate::core::chart::ChartSettings;
use crate::utils::error::{DashboardError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;
pub const DEFAULT_DATA_PATH: &str = "data.csv";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub chart: ChartSettings,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATA_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，缺少的區段使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DashboardError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_PATH})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").expect("valid env var regex");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// `host:port`，交給 `TcpListener::bind` 解析
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("server.host", &self.server.host)?;
        if self.server.host.chars().any(char::is_whitespace) {
            return Err(DashboardError::InvalidConfigValueError {
                field: "server.host".to_string(),
                value: self.server.host.clone(),
                reason: "Host cannot contain whitespace".to_string(),
            });
        }
        validation::validate_positive_number("server.port", self.server.port, 1)?;

        validation::validate_path("data.path", &self.data.path)?;

        validation::validate_palette("chart.palette", &self.chart.palette)?;
        validation::validate_range("chart.y_range", self.chart.y_range)?;
        validation::validate_positive_number("chart.width", self.chart.width, 1)?;
        validation::validate_positive_number("chart.height", self.chart.height, 1)?;

        Ok(())
    }
}
