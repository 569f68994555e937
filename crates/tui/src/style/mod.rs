//! Visual styling for the picker.
//!
//! Themes carry the colour scheme. [`StyleConfig`] is the umbrella the rest
//! of the UI reads from.

pub mod theme;

pub use theme::{DEFAULT_THEME_NAME, Theme, ThemeDefinition, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	pub theme: Theme,
}

impl StyleConfig {
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
