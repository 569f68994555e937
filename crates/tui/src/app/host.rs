//! The picker's side of the controlled-component contract.

use log::trace;
use mselect_core::SelectHandler;

/// Changes requested by the widget during one interaction.
///
/// Collected while the widget borrows the app's items and selection, then
/// applied once the borrow ends.
pub(crate) struct HostChanges<Id, Item> {
	pub selection: Option<Vec<Id>>,
	pub items: Option<Vec<Item>>,
}

impl<Id, Item> Default for HostChanges<Id, Item> {
	fn default() -> Self {
		Self {
			selection: None,
			items: None,
		}
	}
}

impl<Id, Item> SelectHandler<Id, Item> for HostChanges<Id, Item> {
	fn on_selected_items_change(&mut self, selection: Vec<Id>) {
		self.selection = Some(selection);
	}

	fn on_add_item(&mut self, items: Vec<Item>) {
		self.items = Some(items);
	}

	fn on_change_input(&mut self, text: &str) {
		trace!("search text changed to {text:?}");
	}

	fn on_clear_selector(&mut self) {
		trace!("list closed through the back arrow");
	}

	fn on_toggle_list(&mut self) {
		trace!("list toggled");
	}
}
