use log::debug;

/// The only state the widget owns: whether the list is open and what has
/// been typed into the search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorState {
	open: bool,
	search_term: String,
}

impl SelectorState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Start with the given search text already typed.
	#[must_use]
	pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
		self.search_term = term.into();
		self
	}

	/// Start with the list expanded.
	#[must_use]
	pub fn opened(mut self) -> Self {
		self.open = true;
		self
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.open
	}

	#[must_use]
	pub fn search_term(&self) -> &str {
		&self.search_term
	}

	pub fn set_search_term(&mut self, term: impl Into<String>) {
		self.search_term = term.into();
	}

	pub fn clear_search(&mut self) {
		self.search_term.clear();
	}

	/// Flip between the collapsed header and the open list.
	pub fn toggle(&mut self) {
		self.open = !self.open;
		debug!("selector {}", if self.open { "opened" } else { "collapsed" });
	}

	/// Close the list and forget the search text.
	pub fn submit(&mut self) {
		self.open = false;
		self.clear_search();
		debug!("selector submitted");
	}
}
