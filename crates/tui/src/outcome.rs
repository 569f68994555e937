/// Result of running the picker to completion.
#[derive(Debug, Clone, PartialEq)]
pub struct PickOutcome<Id, Item> {
	/// `false` when the user cancelled.
	pub accepted: bool,
	/// Selection at exit, in selection order.
	pub selected: Vec<Id>,
	/// Item list at exit, including items created during the session.
	pub items: Vec<Item>,
	/// Identifiers of items created during the session.
	pub added: Vec<Id>,
	/// Search text at exit.
	pub query: String,
}

impl<Id, Item> PickOutcome<Id, Item> {
	#[must_use]
	pub fn is_cancelled(&self) -> bool {
		!self.accepted
	}
}
