use std::path::PathBuf;

use log::LevelFilter;
use mselect::{FieldKeys, SelectConfig};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};
pub(crate) use validation::{parse_filter_method, parse_log_level};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	/// JSON document holding the items.
	pub items_file: Option<PathBuf>,
	/// Labels turned into items when no file is given.
	pub labels: Vec<String>,
	pub schema: FieldKeys,
	/// Initially selected identifiers, as typed by the user.
	pub selected: Vec<String>,
	pub select: SelectConfig,
	pub initial_query: String,
	pub open: bool,
	pub theme: Option<String>,
	pub log_level: LevelFilter,
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
impl Default for ResolvedConfig {
	fn default() -> Self {
		Self {
			items_file: None,
			labels: Vec::new(),
			schema: FieldKeys::default(),
			selected: Vec::new(),
			select: SelectConfig::default(),
			initial_query: String::new(),
			open: false,
			theme: None,
			log_level: LevelFilter::Info,
			log_file: None,
		}
	}
}
