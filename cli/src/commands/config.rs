//! `reach config`: show and set configuration values.

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;
use crate::application::services::config_service;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Set configuration value (an empty value clears optional keys)
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
    /// Print the config file location
    Path,
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the key or value is invalid or the file cannot be
/// read or written.
pub fn run(app: &AppContext, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let config = app.load_config()?;
            let path = app.config_store.path()?;
            app.renderer().render_config(&config, &path)
        }
        ConfigCommand::Set { key, value } => {
            let outcome = config_service::set_value(&app.config_store, &key, &value)?;
            if app.is_json() {
                let mut doc = serde_json::json!({ "key": key, "value": value });
                if let Some(reason) = &outcome.reset_reason {
                    doc["reset"] = serde_json::Value::String(reason.clone());
                }
                println!("{}", crate::output::json::to_pretty(&doc)?);
            } else {
                if let Some(reason) = &outcome.reset_reason {
                    app.output
                        .warn(&format!("Previous config was unreadable and was reset: {reason}"));
                }
                app.output.success(&format!("Set {key} = {value}"));
            }
            Ok(())
        }
        ConfigCommand::Path => {
            println!("{}", app.config_store.path()?.display());
            Ok(())
        }
    }
}
