use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use mselect::FilterMethod;

use super::{RawConfig, SettingSource, detect_source};
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"mselect",
		"--item",
		"Apple",
		"--unique-key",
		"id",
		"--display-key",
		"title",
		"-s",
		"Apple",
		"--single",
		"--filter-method",
		"full",
		"--can-add-items",
		"--select-text",
		"Pick fruit",
		"--placeholder",
		"Find",
		"--theme",
		"light",
		"-q",
		"ap",
		"--open",
		"--log-level",
		"debug",
		"--log-file",
		"/tmp/mselect.log",
	]);

	let mut config = RawConfig::default();
	config.select.single = Some(false);
	config.text.select_text = Some("From file".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.items.labels, Some(vec!["Apple".to_string()]));
	assert_eq!(config.items.unique_key.as_deref(), Some("id"));
	assert_eq!(config.items.selected, Some(vec!["Apple".to_string()]));
	assert_eq!(config.select.single, Some(true));
	assert_eq!(config.select.filter_method.as_deref(), Some("full"));
	assert_eq!(config.text.select_text.as_deref(), Some("Pick fruit"));
	assert_eq!(config.ui.theme, cli.theme);
	assert_eq!(config.ui.log_file, Some(PathBuf::from("/tmp/mselect.log")));

	let resolved = config.resolve(&cli).expect("resolve");
	assert_eq!(resolved.schema.display_key, "title");
	assert!(resolved.select.single);
	assert!(resolved.select.can_add_items);
	assert_eq!(resolved.select.filter_method, FilterMethod::Full);
	assert_eq!(resolved.select.texts.placeholder, "Find");
	assert_eq!(resolved.select.texts.submit_text, "Submit");
	assert_eq!(resolved.initial_query, "ap");
	assert!(resolved.open);
	assert_eq!(resolved.log_level, LevelFilter::Debug);
}

#[test]
fn unset_values_fall_back_to_defaults() {
	let cli = CliArgs::parse_from(["mselect"]);
	let resolved = RawConfig::default().resolve(&cli).expect("resolve");

	assert_eq!(resolved.schema.unique_key, "_id");
	assert_eq!(resolved.schema.display_key, "name");
	assert!(!resolved.select.single);
	assert_eq!(resolved.select.filter_method, FilterMethod::Tokens);
	assert_eq!(resolved.log_level, LevelFilter::Info);
	assert!(resolved.theme.is_none());
	assert!(!resolved.open);
}

#[test]
fn invalid_filter_method_names_its_origin() {
	let cli = CliArgs::parse_from(["mselect"]);
	let mut config = RawConfig::default();
	config.select.filter_method = Some("fuzzy".into());

	let err = config.resolve(&cli).unwrap_err().to_string();
	assert!(err.contains("select.filter_method"));
	assert!(err.contains("value: fuzzy"));
}

#[test]
fn blank_selected_ids_are_dropped() {
	let cli = CliArgs::parse_from(["mselect", "-s", "a, ,b"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).expect("resolve");
	assert_eq!(resolved.selected, vec!["a", "b"]);
}

#[test]
fn detect_source_prefers_cli_flags() {
	assert_eq!(
		detect_source(true, true, "MSELECT__UI__THEME", "--theme", "ui.theme"),
		Some(SettingSource::CliFlag("--theme"))
	);
	assert_eq!(
		detect_source(false, false, "MSELECT__UI__THEME", "--theme", "ui.theme"),
		None
	);
}

#[test]
fn sections_deserialize_from_toml() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("mselect.toml");
	std::fs::write(
		&path,
		r#"
[items]
labels = ["Apple", "Banana"]
selected = ["Apple"]

[select]
remove_selected = true

[ui]
theme = "solarized"
"#,
	)
	.expect("write config");

	let raw: RawConfig = config::Config::builder()
		.add_source(config::File::from(path))
		.build()
		.expect("build")
		.try_deserialize()
		.expect("deserialize");

	assert_eq!(
		raw.items.labels,
		Some(vec!["Apple".to_string(), "Banana".to_string()])
	);
	assert_eq!(raw.select.remove_selected, Some(true));
	assert_eq!(raw.ui.theme.as_deref(), Some("solarized"));
}
