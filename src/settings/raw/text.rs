use mselect::SelectTexts;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Display strings. Anything left unset keeps the widget default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct TextSection {
	pub(super) select_text: Option<String>,
	pub(super) selected_text: Option<String>,
	pub(super) no_items_text: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) submit_text: Option<String>,
}

impl TextSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(text) = cli.select_text.clone() {
			self.select_text = Some(text);
		}
		if let Some(text) = cli.selected_text.clone() {
			self.selected_text = Some(text);
		}
		if let Some(text) = cli.no_items_text.clone() {
			self.no_items_text = Some(text);
		}
		if let Some(text) = cli.placeholder.clone() {
			self.placeholder = Some(text);
		}
		if let Some(text) = cli.submit_text.clone() {
			self.submit_text = Some(text);
		}
	}

	pub(super) fn finalize(self) -> SelectTexts {
		let defaults = SelectTexts::default();
		SelectTexts {
			select_text: self.select_text.unwrap_or(defaults.select_text),
			selected_text: self.selected_text.unwrap_or(defaults.selected_text),
			no_items_text: self.no_items_text.unwrap_or(defaults.no_items_text),
			placeholder: self.placeholder.unwrap_or(defaults.placeholder),
			submit_text: self.submit_text.unwrap_or(defaults.submit_text),
		}
	}
}
