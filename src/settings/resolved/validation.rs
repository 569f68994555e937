use log::LevelFilter;
use mselect::FilterMethod;
use mselect::style::by_name;

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.schema.unique_key.trim().is_empty() {
		return Err(ConfigError::invalid(
			"items.unique_key",
			config.schema.unique_key.clone(),
			sources.source_for_unique_key(),
			"must not be empty",
		));
	}

	if config.schema.display_key.trim().is_empty() {
		return Err(ConfigError::invalid(
			"items.display_key",
			config.schema.display_key.clone(),
			sources.source_for_display_key(),
			"must not be empty",
		));
	}

	if let Some(file) = &config.items_file
		&& !config.labels.is_empty()
	{
		return Err(ConfigError::invalid(
			"items.file",
			file.display().to_string(),
			sources.source_for_items_file(),
			"cannot be combined with item labels",
		));
	}

	if let Some(theme) = &config.theme
		&& by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for_theme(),
			"unknown theme, see --list-themes",
		));
	}

	Ok(())
}

pub(crate) fn parse_filter_method(
	value: &str,
	source: SettingSource,
) -> Result<FilterMethod, ConfigError> {
	value
		.parse::<FilterMethod>()
		.map_err(|err| ConfigError::invalid("select.filter_method", value, source, err.to_string()))
}

pub(crate) fn parse_log_level(value: &str, source: SettingSource) -> Result<LevelFilter, ConfigError> {
	value.parse::<LevelFilter>().map_err(|_| {
		ConfigError::invalid(
			"ui.log_level",
			value,
			source,
			"expected one of off, error, warn, info, debug, trace",
		)
	})
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use mselect::FieldKeys;

	use super::*;

	#[test]
	fn validation_rejects_empty_unique_key() {
		let config = ResolvedConfig {
			schema: FieldKeys::new(" ", "name"),
			..ResolvedConfig::default()
		};
		let sources = ConfigSources {
			unique_key: Some(SettingSource::CliFlag("--unique-key")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert!(matches!(err.key, "items.unique_key"));
		assert!(err.to_string().contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_file_combined_with_labels() {
		let config = ResolvedConfig {
			items_file: Some(PathBuf::from("items.json")),
			labels: vec!["Apple".into()],
			..ResolvedConfig::default()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert!(matches!(err.key, "items.file"));
		assert!(err.to_string().contains("value: items.json"));
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let config = ResolvedConfig {
			theme: Some("neon".into()),
			..ResolvedConfig::default()
		};
		let sources = ConfigSources {
			theme: Some(SettingSource::Environment("MSELECT__UI__THEME")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		let message = err.to_string();
		assert!(message.contains("value: neon"));
		assert!(message.contains("environment variable"));
	}

	#[test]
	fn validation_accepts_theme_aliases() {
		let config = ResolvedConfig {
			theme: Some("dark".into()),
			..ResolvedConfig::default()
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn parsers_report_their_key() {
		assert_eq!(
			parse_filter_method("full", SettingSource::ConfigKey("select.filter_method")).ok(),
			Some(FilterMethod::Full)
		);
		let err = parse_filter_method("fuzzy", SettingSource::ConfigKey("select.filter_method"))
			.unwrap_err();
		assert!(matches!(err.key, "select.filter_method"));

		assert_eq!(
			parse_log_level("DEBUG", SettingSource::ConfigKey("ui.log_level")).ok(),
			Some(LevelFilter::Debug)
		);
		assert!(parse_log_level("loud", SettingSource::ConfigKey("ui.log_level")).is_err());
	}
}
