use mselect::{FilterMethod, SelectConfig, SelectTexts};
use serde::Deserialize;

use super::super::resolved::{ConfigError, SettingSource, parse_filter_method};
use crate::cli::CliArgs;

/// Behavioural switches of the widget prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SelectSection {
	pub(super) single: Option<bool>,
	pub(super) filter_method: Option<String>,
	pub(super) remove_selected: Option<bool>,
	pub(super) can_add_items: Option<bool>,
	pub(super) hide_tags: Option<bool>,
	pub(super) hide_submit_button: Option<bool>,
	pub(super) hide_dropdown: Option<bool>,
}

impl SelectSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.single {
			self.single = Some(value);
		}
		if let Some(method) = cli.filter_method {
			self.filter_method = Some(method.as_str().to_string());
		}
		if let Some(value) = cli.remove_selected {
			self.remove_selected = Some(value);
		}
		if let Some(value) = cli.can_add_items {
			self.can_add_items = Some(value);
		}
		if let Some(value) = cli.hide_tags {
			self.hide_tags = Some(value);
		}
		if let Some(value) = cli.hide_submit_button {
			self.hide_submit_button = Some(value);
		}
		if let Some(value) = cli.hide_dropdown {
			self.hide_dropdown = Some(value);
		}
	}

	pub(super) fn finalize(
		self,
		texts: SelectTexts,
		filter_source: SettingSource,
	) -> Result<SelectConfig, ConfigError> {
		let filter_method = match self.filter_method {
			Some(method) => parse_filter_method(&method, filter_source)?,
			None => FilterMethod::default(),
		};

		Ok(SelectConfig {
			single: self.single.unwrap_or(false),
			filter_method,
			remove_selected: self.remove_selected.unwrap_or(false),
			can_add_items: self.can_add_items.unwrap_or(false),
			hide_tags: self.hide_tags.unwrap_or(false),
			hide_submit_button: self.hide_submit_button.unwrap_or(false),
			hide_dropdown: self.hide_dropdown.unwrap_or(false),
			texts,
		})
	}
}
