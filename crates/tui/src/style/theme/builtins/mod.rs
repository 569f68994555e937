mod light;
mod slate;
mod solarized;

use super::types::{Theme, ThemeDefinition};

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	slate::DEFINITION,
	light::DEFINITION,
	solarized::DEFINITION,
];

pub const DEFAULT_THEME_NAME: &str = slate::NAME;

#[must_use]
pub fn default_theme() -> Theme {
	slate::SLATE
}
