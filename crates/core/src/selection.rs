//! Pure transformations of the caller-owned selection sequence.

use serde::{Deserialize, Serialize};

/// Selection behaviour when an item is chosen.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
	/// Choosing an item replaces the selection and closes the list.
	Single,
	/// Choosing an item toggles its membership.
	#[default]
	Multi,
}

impl SelectionMode {
	#[must_use]
	pub fn from_single(single: bool) -> Self {
		if single { Self::Single } else { Self::Multi }
	}

	#[must_use]
	pub fn is_single(self) -> bool {
		matches!(self, Self::Single)
	}
}

/// Outcome of toggling one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggled<Id> {
	/// Selection to hand back to the owner.
	pub selection: Vec<Id>,
	/// Whether the selector should close as a submit.
	pub submit: bool,
}

/// Toggle `id` within `selected`.
///
/// Multi mode removes an existing identifier (keeping the order of the rest)
/// or appends a new one at the end, so the sequence reflects toggle order.
/// Single mode always yields `[id]` and asks for a submit.
pub fn toggle<Id: Clone + PartialEq>(selected: &[Id], id: &Id, mode: SelectionMode) -> Toggled<Id> {
	match mode {
		SelectionMode::Single => Toggled {
			selection: vec![id.clone()],
			submit: true,
		},
		SelectionMode::Multi if selected.contains(id) => Toggled {
			selection: remove(selected, id),
			submit: false,
		},
		SelectionMode::Multi => Toggled {
			selection: append(selected, id),
			submit: false,
		},
	}
}

/// Copy of `selected` without any occurrence of `id`.
pub fn remove<Id: Clone + PartialEq>(selected: &[Id], id: &Id) -> Vec<Id> {
	selected
		.iter()
		.filter(|existing| *existing != id)
		.cloned()
		.collect()
}

/// Copy of `selected` with `id` pushed onto the end.
pub fn append<Id: Clone>(selected: &[Id], id: &Id) -> Vec<Id> {
	let mut next = Vec::with_capacity(selected.len() + 1);
	next.extend_from_slice(selected);
	next.push(id.clone());
	next
}
