use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod items;
mod select;
mod text;
mod ui;

use items::ItemsSection;
use select::SelectSection;
use text::TextSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	items: ItemsSection,
	select: SelectSection,
	text: TextSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.items.apply_cli_overrides(cli);
		self.select.apply_cli_overrides(cli);
		self.text.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			items_file: detect_source(
				cli.items.is_some(),
				self.items.file.is_some(),
				"MSELECT__ITEMS__FILE",
				"--items",
				"items.file",
			),
			unique_key: detect_source(
				cli.unique_key.is_some(),
				self.items.unique_key.is_some(),
				"MSELECT__ITEMS__UNIQUE_KEY",
				"--unique-key",
				"items.unique_key",
			),
			display_key: detect_source(
				cli.display_key.is_some(),
				self.items.display_key.is_some(),
				"MSELECT__ITEMS__DISPLAY_KEY",
				"--display-key",
				"items.display_key",
			),
			filter_method: detect_source(
				cli.filter_method.is_some(),
				self.select.filter_method.is_some(),
				"MSELECT__SELECT__FILTER_METHOD",
				"--filter-method",
				"select.filter_method",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"MSELECT__UI__THEME",
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				cli.log_level.is_some(),
				self.ui.log_level.is_some(),
				"MSELECT__UI__LOG_LEVEL",
				"--log-level",
				"ui.log_level",
			),
		};

		let items = self.items.resolve();
		let texts = self.text.finalize();
		let select = self
			.select
			.finalize(texts, sources.source_for_filter_method())
			.map_err(Error::new)?;
		let ui = self
			.ui
			.finalize(sources.source_for_log_level())
			.map_err(Error::new)?;

		let config = ResolvedConfig {
			items_file: items.file,
			labels: items.labels,
			schema: items.schema,
			selected: items.selected,
			select,
			initial_query: ui.initial_query,
			open: ui.open,
			theme: ui.theme,
			log_level: ui.log_level,
			log_file: ui.log_file,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
