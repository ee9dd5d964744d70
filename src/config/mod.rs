pub mod toml_config;

pub use toml_config::AppConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// 命令列參數全部可省略；未指定時使用設定檔或預設值
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "car-ratings")]
#[command(about = "Interactive car ratings dashboard")]
pub struct CliConfig {
    /// Path to the ratings CSV (columns Make, Model, Year, Rating)
    #[arg(long)]
    pub data: Option<String>,

    /// Address to bind the web server to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind the web server to
    #[arg(long)]
    pub port: Option<u16>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併順序：預設值 → 設定檔 → 命令列
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(data) = &self.data {
            config.data.path = data.clone();
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        Ok(config)
    }
}
