use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use mselect::app_dirs;

use crate::cli::CliArgs;

/// Keys read from the environment as comma-separated lists.
const LIST_KEYS: [&str; 2] = ["items.labels", "items.selected"];

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(environment());

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Variables such as `MSELECT__SELECT__FILTER_METHOD` map to `select.filter_method`.
fn environment() -> Environment {
	LIST_KEYS.into_iter().fold(
		Environment::with_prefix("mselect")
			.separator("__")
			.try_parsing(true)
			.list_separator(","),
		|env, key| env.with_list_parse_key(key),
	)
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".mselect.toml"));
		files.push(current_dir.join("mselect.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".mselect.toml")));
		assert!(files.iter().any(|path| path.ends_with("mselect.toml")));
	}

	#[test]
	fn explicit_config_files_are_merged() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("picker.toml");
		fs::write(
			&path,
			"[select]\nsingle = true\n\n[text]\nselect_text = \"Pick fruit\"\n",
		)
		.expect("write config");

		let cli = CliArgs::parse_from([
			"mselect",
			"--no-config",
			"--config",
			path.to_str().expect("utf-8 path"),
		]);
		let config = build_config(&cli).expect("config");
		assert!(config.get_bool("select.single").expect("single"));
		assert_eq!(
			config.get_string("text.select_text").expect("select text"),
			"Pick fruit"
		);
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("absent.toml");
		let cli = CliArgs::parse_from([
			"mselect",
			"--no-config",
			"--config",
			path.to_str().expect("utf-8 path"),
		]);
		assert!(build_config(&cli).is_err());
	}
}
