//! Colors for status markers and headings.

use owo_colors::Style;

/// Styles used by the human renderer. Every field is plain unless colors
/// are enabled.
#[derive(Default, Clone)]
pub struct Styles {
    /// `✓` markers: installed providers, saved settings.
    pub success: Style,
    /// `⚠` markers: advisory warnings.
    pub warning: Style,
    /// `✗` markers: missing providers.
    pub error: Style,
    /// Keys in status listings and "not installed" notes.
    pub dim: Style,
    /// Section headings.
    pub header: Style,
}

impl Styles {
    /// Colored styles when `colors` is set, plain ones otherwise.
    #[must_use]
    pub fn new(colors: bool) -> Self {
        if !colors {
            return Self::default();
        }
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red(),
            dim: Style::new().dimmed(),
            header: Style::new().bold().cyan(),
        }
    }
}
