use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub catalog: CatalogSettings,
    pub scroll: ScrollSettings,
    pub notification: NotificationSettings,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Сколько товаров запрашивать за один вызов (фактически «все»)
    pub fetch_limit: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogSettings {
    pub batch_size: usize,
    pub debounce_ms: u32,
    /// Имитация сетевой задержки при догрузке следующей порции
    pub grow_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScrollSettings {
    pub root_margin_px: u32,
    pub cooldown_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NotificationSettings {
    pub ttl_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://dummyjson.com"
fetch_limit = 1000

[catalog]
batch_size = 12
debounce_ms = 800
grow_delay_ms = 300

[scroll]
root_margin_px = 300
cooldown_ms = 200

[notification]
ttl_ms = 4000

[logging]
level = "debug"
"#;

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            catalog: CatalogSettings::default(),
            scroll: ScrollSettings::default(),
            notification: NotificationSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dummyjson.com".to_string(),
            fetch_limit: 1000,
        }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            batch_size: 12,
            debounce_ms: 800,
            grow_delay_ms: 300,
        }
    }
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            root_margin_px: 300,
            cooldown_ms: 200,
        }
    }
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self { ttl_ms: 4000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl ApiConfig {
    /// Полный URL списка товаров
    pub fn products_url(&self) -> String {
        format!(
            "{}/products?limit={}",
            self.base_url.trim_end_matches('/'),
            self.fetch_limit
        )
    }
}

impl Config {
    /// Уровень логирования; неизвестные значения трактуются как `Debug`
    pub fn log_level(&self) -> log::Level {
        self.logging.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Parse configuration from TOML text. Missing sections and keys keep their defaults.
pub fn parse_config(text: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(text)?;
    if config.catalog.batch_size == 0 {
        anyhow::bail!("catalog.batch_size must be greater than zero");
    }
    Ok(config)
}

/// Load the embedded default configuration
pub fn default_config() -> anyhow::Result<Config> {
    parse_config(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = default_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.catalog.batch_size, 12);
        assert_eq!(config.catalog.debounce_ms, 800);
        assert_eq!(config.scroll.root_margin_px, 300);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config("[api]\nbase_url = \"http://localhost:8080/\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080/");
        assert_eq!(config.api.fetch_limit, 1000);
        assert_eq!(config.api.products_url(), "http://localhost:8080/products?limit=1000");
        assert_eq!(config.notification.ttl_ms, 4000);
    }

    #[test]
    fn test_zero_batch_rejected() {
        assert!(parse_config("[catalog]\nbatch_size = 0\n").is_err());
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = parse_config("[logging]\nlevel = \"loud\"\n").unwrap();
        assert_eq!(config.log_level(), log::Level::Debug);
        let config = parse_config("[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
