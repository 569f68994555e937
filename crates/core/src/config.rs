//! Behavioural switches and display text for a [`MultiSelect`](crate::MultiSelect).

use serde::{Deserialize, Serialize};

use crate::filter::FilterMethod;
use crate::selection::SelectionMode;

/// Options that change how the widget behaves.
///
/// Every field has a default, so partial documents deserialize cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
	/// Replace the selection on each pick and close immediately.
	pub single: bool,
	pub filter_method: FilterMethod,
	/// Hide items that are already selected from the open list.
	pub remove_selected: bool,
	/// Offer to create an item from unmatched search text.
	pub can_add_items: bool,
	pub hide_tags: bool,
	pub hide_submit_button: bool,
	/// Hide the back arrow that closes the list without submitting.
	pub hide_dropdown: bool,
	pub texts: SelectTexts,
}

impl SelectConfig {
	#[must_use]
	pub fn mode(&self) -> SelectionMode {
		SelectionMode::from_single(self.single)
	}
}

/// Text shown by the widget. Purely presentational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectTexts {
	/// Header label while nothing is selected.
	pub select_text: String,
	/// Suffix of the "(N selected)" count.
	pub selected_text: String,
	/// Shown when the open list has no rows.
	pub no_items_text: String,
	/// Search box placeholder.
	pub placeholder: String,
	pub submit_text: String,
}

impl Default for SelectTexts {
	fn default() -> Self {
		Self {
			select_text: "Select".to_string(),
			selected_text: "selected".to_string(),
			no_items_text: "No items to display.".to_string(),
			placeholder: "Search".to_string(),
			submit_text: "Submit".to_string(),
		}
	}
}
