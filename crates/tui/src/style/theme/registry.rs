//! Name lookup over the themes bundled with the picker.

use super::builtins::BUILT_IN_DEFINITIONS;
use super::types::Theme;

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.answers_to(name))
		.map(|definition| definition.theme)
}

/// Canonical theme names, sorted case-insensitively.
#[must_use]
pub fn names() -> Vec<&'static str> {
	let mut names: Vec<&'static str> = BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect();
	names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
	names
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_themes_are_listed() {
		assert_eq!(names(), vec!["light", "slate", "solarized"]);
	}

	#[test]
	fn lookup_accepts_aliases_in_any_case() {
		assert_eq!(by_name("DARK"), by_name("slate"));
		assert_eq!(by_name(" Solarized-Dark "), by_name("solarized"));
		assert!(by_name("light").is_some());
		assert!(by_name("no-such-theme").is_none());
	}

	#[test]
	fn built_in_names_and_aliases_are_unique() {
		for (index, definition) in BUILT_IN_DEFINITIONS.iter().enumerate() {
			for other in &BUILT_IN_DEFINITIONS[index + 1..] {
				assert!(!other.answers_to(definition.name), "{} shadowed", definition.name);
				for alias in definition.aliases {
					assert!(!other.answers_to(alias), "alias {alias} is shared");
				}
			}
		}
	}
}
