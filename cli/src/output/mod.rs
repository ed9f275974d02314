//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod reporter;
pub mod styles;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;
use reach_common::{ConnectionOutput, StatusOutput};
pub use human::HumanRenderer;
pub use reporter::TerminalReporter;
pub use styles::Styles;

use crate::domain::config::ReachConfig;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        Self {
            styles: Styles::new(use_colors),
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet && Term::stderr().is_term()
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠` to stderr. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            eprintln!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }
}

/// Renders machine-readable JSON to stdout.
pub struct JsonRenderer;

/// Output renderer selected by `--json`.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render connection info (full block or hostname only).
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_connection(&self, conn: &ConnectionOutput, hostname_only: bool) -> Result<()> {
        match self {
            Self::Human(h) => {
                h.render_connection(conn, hostname_only);
                Ok(())
            }
            Self::Json(_) if hostname_only => {
                println!("{}", json::to_pretty(&serde_json::json!({ "hostname": conn.hostname }))?);
                Ok(())
            }
            Self::Json(_) => {
                println!("{}", json::to_pretty(conn)?);
                Ok(())
            }
        }
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Self::Human(_) => println!("reach {version}"),
            Self::Json(_) => {
                println!("{}", json::to_pretty(&serde_json::json!({ "version": version }))?);
            }
        }
        Ok(())
    }

    /// Render tunnel status.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_status(&self, status: &StatusOutput) -> Result<()> {
        match self {
            Self::Human(h) => {
                h.render_status(status);
                Ok(())
            }
            Self::Json(_) => {
                println!("{}", json::to_pretty(status)?);
                Ok(())
            }
        }
    }

    /// Render the current configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_config(&self, config: &ReachConfig, path: &std::path::Path) -> Result<()> {
        match self {
            Self::Human(h) => h.render_config(config, path),
            Self::Json(_) => {
                println!(
                    "{}",
                    json::to_pretty(&serde_json::json!({
                        "path": path.display().to_string(),
                        "config": config,
                    }))?
                );
                Ok(())
            }
        }
    }
}
