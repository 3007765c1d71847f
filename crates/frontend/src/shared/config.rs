//! Client configuration
//!
//! Starts from the configuration embedded in `contracts` and applies
//! optional overrides from the page query string, e.g.
//! `?api_base=http%3A%2F%2Flocalhost%3A8080&log_level=info`.

use contracts::shared::config::{default_config, Config};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct QueryOverrides {
    api_base: Option<String>,
    log_level: Option<String>,
}

/// Load configuration: embedded defaults plus query-string overrides
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = default_config()?;

    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    apply_query_overrides(&mut config, &search)?;

    Ok(config)
}

/// Apply overrides from a location search string (with or without leading `?`)
pub fn apply_query_overrides(config: &mut Config, search: &str) -> anyhow::Result<()> {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        return Ok(());
    }

    let overrides: QueryOverrides = serde_qs::from_str(query)?;
    if let Some(api_base) = overrides.api_base.filter(|s| !s.trim().is_empty()) {
        config.api.base_url = api_base;
    }
    if let Some(level) = overrides.log_level {
        config.logging.level = level;
    }
    Ok(())
}
