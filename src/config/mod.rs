pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_distinct, validate_path, Validate};
use serde::{Deserialize, Serialize};
use self::toml_config::TomlConfig;

pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_MENU_FILE: &str = "menu.json";
pub const DEFAULT_ORDERS_FILE: &str = "orders.json";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, clap::Parser)]
#[command(name = "zesty-zomato")]
#[command(about = "Menu and order management for a small restaurant")]
pub struct CliConfig {
    /// Directory holding the menu and orders files
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Menu file name, relative to the data directory
    #[arg(long)]
    pub menu_file: Option<String>,

    /// Orders file name, relative to the data directory
    #[arg(long)]
    pub orders_file: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log format: compact or json
    #[arg(long)]
    pub log_format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges flags over the TOML file (if any) over the defaults.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Settings::layered(self, &file)
    }
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub data_dir: String,
    pub menu_file: String,
    pub orders_file: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            menu_file: DEFAULT_MENU_FILE.to_string(),
            orders_file: DEFAULT_ORDERS_FILE.to_string(),
            log_level: "warn".to_string(),
            log_format: LogFormat::Compact,
        }
    }
}

impl Settings {
    /// Builds settings from a TOML file alone.
    pub fn from_toml(file: &TomlConfig) -> Result<Self> {
        let defaults = Settings::default();
        let log_format = match file.log_format() {
            Some(format) => format.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            data_dir: file.data_dir().unwrap_or(DEFAULT_DATA_DIR).to_string(),
            menu_file: file.menu_file().unwrap_or(DEFAULT_MENU_FILE).to_string(),
            orders_file: file.orders_file().unwrap_or(DEFAULT_ORDERS_FILE).to_string(),
            log_level: file
                .log_level()
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            log_format,
        })
    }

    #[cfg(feature = "cli")]
    fn layered(cli: &CliConfig, file: &TomlConfig) -> Result<Self> {
        let mut settings = Self::from_toml(file)?;

        if let Some(dir) = &cli.data_dir {
            settings.data_dir = dir.clone();
        }
        if let Some(menu) = &cli.menu_file {
            settings.menu_file = menu.clone();
        }
        if let Some(orders) = &cli.orders_file {
            settings.orders_file = orders.clone();
        }
        if let Some(format) = &cli.log_format {
            settings.log_format = format.parse()?;
        }
        if cli.verbose {
            settings.log_level = "debug".to_string();
        }

        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn menu_file(&self) -> &str {
        &self.menu_file
    }

    fn orders_file(&self) -> &str {
        &self.orders_file
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("storage.data_dir", &self.data_dir)?;
        validate_path("storage.menu_file", &self.menu_file)?;
        validate_path("storage.orders_file", &self.orders_file)?;
        validate_distinct("storage.orders_file", &self.menu_file, &self.orders_file)?;
        Ok(())
    }
}
