/// Callbacks through which the widget reports changes to its owner.
///
/// Only selection changes are mandatory. The remaining notifications default
/// to no-ops.
pub trait SelectHandler<Id, Item> {
	/// The owner should replace its selection with `selection`.
	fn on_selected_items_change(&mut self, selection: Vec<Id>);

	/// The owner should replace its item list with `items`.
	fn on_add_item(&mut self, _items: Vec<Item>) {}

	fn on_change_input(&mut self, _text: &str) {}

	/// The list was closed through the back arrow.
	fn on_clear_selector(&mut self) {}

	fn on_toggle_list(&mut self) {}
}

/// Adapter turning a closure into a handler that only tracks selection.
pub struct FnHandler<F>(pub F);

impl<Id, Item, F> SelectHandler<Id, Item> for FnHandler<F>
where
	F: FnMut(Vec<Id>),
{
	fn on_selected_items_change(&mut self, selection: Vec<Id>) {
		(self.0)(selection);
	}
}
