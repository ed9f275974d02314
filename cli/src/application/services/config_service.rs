//! Application service: configuration use-cases.

use crate::application::ports::ConfigStore;
use crate::domain::config::ReachConfig;
use anyhow::Result;

/// Outcome of [`set_value`].
#[derive(Debug)]
pub struct SetOutcome {
    pub config: ReachConfig,
    /// Why the previous file was unreadable, when it was replaced by defaults.
    pub reset_reason: Option<String>,
}

/// Load configuration and check every value is within range.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or holds an
/// out-of-range value.
pub fn load_config(store: &impl ConfigStore) -> Result<ReachConfig> {
    let config = store.load()?;
    config.validate()?;
    Ok(config)
}

/// Save configuration.
pub fn save_config(store: &impl ConfigStore, config: &ReachConfig) -> Result<()> {
    store.save(config)
}

/// Validate and apply `key = value`, then persist.
///
/// Values are not range-checked on the way in so `set` can repair them. A
/// file that cannot be parsed at all is replaced by defaults plus this value.
///
/// # Errors
///
/// Returns an error if the key or value is invalid, or the file cannot be
/// written.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<SetOutcome> {
    let (mut config, reset_reason) = match store.load() {
        Ok(config) => (config, None),
        Err(e) => {
            tracing::debug!("replacing unreadable config: {e:#}");
            (ReachConfig::default(), Some(format!("{e:#}")))
        }
    };
    config.set(key, value)?;
    save_config(store, &config)?;
    Ok(SetOutcome {
        config,
        reset_reason,
    })
}
