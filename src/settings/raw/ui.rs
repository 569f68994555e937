use std::path::PathBuf;

use log::LevelFilter;
use serde::Deserialize;

use super::super::resolved::{ConfigError, SettingSource, parse_log_level};
use crate::cli::CliArgs;

/// Presentation and logging options prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) open: Option<bool>,
	pub(super) log_level: Option<String>,
	pub(super) log_file: Option<PathBuf>,
}

pub(super) struct UiResolution {
	pub(super) theme: Option<String>,
	pub(super) initial_query: String,
	pub(super) open: bool,
	pub(super) log_level: LevelFilter,
	pub(super) log_file: Option<PathBuf>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(open) = cli.open {
			self.open = Some(open);
		}
		if let Some(level) = cli.log_level {
			self.log_level = Some(level.as_str().to_string());
		}
		if let Some(file) = cli.log_file.clone() {
			self.log_file = Some(file);
		}
	}

	pub(super) fn finalize(self, level_source: SettingSource) -> Result<UiResolution, ConfigError> {
		let log_level = match self.log_level {
			Some(level) => parse_log_level(&level, level_source)?,
			None => LevelFilter::Info,
		};
		let theme = self
			.theme
			.map(|name| name.trim().to_string())
			.filter(|name| !name.is_empty());

		Ok(UiResolution {
			theme,
			initial_query: self.initial_query.unwrap_or_default(),
			open: self.open.unwrap_or(false),
			log_level,
			log_file: self.log_file,
		})
	}
}
