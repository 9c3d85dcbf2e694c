//! Output styles using owo-colors stylesheet pattern

use owo_colors::Style;
use rlc_common::InstanceState;

/// Centralized stylesheet for CLI output colors.
///
/// Every field is the plain style until [`Styles::colorize`] is called, so a
/// default stylesheet renders uncolored text.
#[derive(Default, Clone)]
pub struct Styles {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    pub info: Style,
    /// Labels and secondary text
    pub dim: Style,
    pub bold: Style,
    /// Section titles and host headers
    pub header: Style,
    pub running: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
        self.error = Style::new().red();
        self.info = Style::new().blue();
        self.dim = Style::new().dimmed();
        self.bold = Style::new().bold();
        self.header = Style::new().bold().cyan();
        self.running = Style::new().bold().green();
    }

    /// Style for an instance state value.
    #[must_use]
    pub fn state(&self, state: InstanceState) -> Style {
        match state {
            InstanceState::Running => self.running,
            InstanceState::Created => self.info,
            InstanceState::Stopped => self.dim,
            InstanceState::Unknown => self.warning,
        }
    }
}
