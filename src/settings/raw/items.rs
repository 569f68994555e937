use std::path::PathBuf;

use mselect::FieldKeys;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Where the items come from and how they are addressed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ItemsSection {
	pub(super) file: Option<PathBuf>,
	pub(super) labels: Option<Vec<String>>,
	pub(super) unique_key: Option<String>,
	pub(super) display_key: Option<String>,
	pub(super) selected: Option<Vec<String>>,
}

pub(super) struct ItemsResolution {
	pub(super) file: Option<PathBuf>,
	pub(super) labels: Vec<String>,
	pub(super) schema: FieldKeys,
	pub(super) selected: Vec<String>,
}

impl ItemsSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(file) = cli.items.clone() {
			self.file = Some(file);
		}
		if !cli.labels.is_empty() {
			self.labels = Some(cli.labels.clone());
		}
		if let Some(key) = cli.unique_key.clone() {
			self.unique_key = Some(key);
		}
		if let Some(key) = cli.display_key.clone() {
			self.display_key = Some(key);
		}
		if !cli.selected.is_empty() {
			self.selected = Some(cli.selected.clone());
		}
	}

	pub(super) fn resolve(self) -> ItemsResolution {
		let defaults = FieldKeys::default();
		let schema = FieldKeys::new(
			self.unique_key.unwrap_or(defaults.unique_key),
			self.display_key.unwrap_or(defaults.display_key),
		);
		let selected = self
			.selected
			.unwrap_or_default()
			.into_iter()
			.map(|id| id.trim().to_string())
			.filter(|id| !id.is_empty())
			.collect();

		ItemsResolution {
			file: self.file,
			labels: self.labels.unwrap_or_default(),
			schema,
			selected,
		}
	}
}
