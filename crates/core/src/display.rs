//! Resolving selected identifiers back to items for display.
//!
//! An identifier that no longer matches any item is not an error: it simply
//! renders nothing. It is still part of the selection though, so the number
//! of selected identifiers and the number of rendered tags can differ. Both
//! are reported by [`SelectionSummary`] and callers decide which one to show.

use crate::config::SelectTexts;
use crate::schema::ItemSchema;
use crate::selection::SelectionMode;

/// Find the item carrying `id`.
pub fn resolve<'i, S: ItemSchema>(schema: &S, items: &'i [S::Item], id: &S::Id) -> Option<&'i S::Item> {
	items.iter().find(|item| schema.id(item) == Some(id))
}

/// A removable chip for one selected identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagView<Id> {
	pub id: Id,
	pub label: String,
}

/// Tags for every selected identifier that resolves to a labelled item,
/// in selection order.
pub fn tags<S: ItemSchema>(schema: &S, items: &[S::Item], selected: &[S::Id]) -> Vec<TagView<S::Id>> {
	selected
		.iter()
		.filter_map(|id| {
			let item = resolve(schema, items, id)?;
			let label = schema.label(item).filter(|label| !label.is_empty())?;
			Some(TagView {
				id: id.clone(),
				label: label.to_string(),
			})
		})
		.collect()
}

/// Independently computed selection counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionSummary {
	/// Length of the selection sequence, resolvable or not.
	pub selected_count: usize,
	/// Number of tags that actually render.
	pub resolved_count: usize,
}

impl SelectionSummary {
	#[must_use]
	pub fn new<S: ItemSchema>(schema: &S, items: &[S::Item], selected: &[S::Id]) -> Self {
		Self {
			selected_count: selected.len(),
			resolved_count: tags(schema, items, selected).len(),
		}
	}

	/// Identifiers that are selected but render no tag.
	#[must_use]
	pub fn unresolved(&self) -> usize {
		self.selected_count.saturating_sub(self.resolved_count)
	}
}

/// Text shown on the collapsed header.
///
/// Single mode shows the chosen item's label, multi mode shows a count that
/// includes unresolved identifiers.
pub fn select_label<S: ItemSchema>(
	schema: &S,
	items: &[S::Item],
	selected: &[S::Id],
	mode: SelectionMode,
	texts: &SelectTexts,
) -> String {
	let Some(first) = selected.first() else {
		return texts.select_text.clone();
	};

	match mode {
		SelectionMode::Single => resolve(schema, items, first)
			.and_then(|item| schema.label(item))
			.unwrap_or(&texts.select_text)
			.to_string(),
		SelectionMode::Multi => format!(
			"{} ({} {})",
			texts.select_text,
			selected.len(),
			texts.selected_text
		),
	}
}

#[cfg(test)]
mod tests {
	use serde_json::{Value, json};

	use super::*;
	use crate::schema::FieldKeys;

	fn items() -> Vec<Value> {
		vec![
			json!({ "_id": 1, "name": "Apple" }),
			json!({ "_id": 2, "name": "Banana" }),
			json!({ "_id": 3, "name": "" }),
		]
	}

	#[test]
	fn multi_label_counts_selection() {
		let label = select_label(
			&FieldKeys::default(),
			&items(),
			&[json!(1), json!(2)],
			SelectionMode::Multi,
			&SelectTexts::default(),
		);
		assert_eq!(label, "Select (2 selected)");
	}

	#[test]
	fn single_label_uses_item_label() {
		let label = select_label(
			&FieldKeys::default(),
			&items(),
			&[json!(1)],
			SelectionMode::Single,
			&SelectTexts::default(),
		);
		assert_eq!(label, "Apple");
	}

	#[test]
	fn single_label_falls_back_when_unresolved() {
		let label = select_label(
			&FieldKeys::default(),
			&items(),
			&[json!(42)],
			SelectionMode::Single,
			&SelectTexts::default(),
		);
		assert_eq!(label, "Select");
	}

	#[test]
	fn empty_selection_shows_select_text() {
		let texts = SelectTexts {
			select_text: "Choose".into(),
			..SelectTexts::default()
		};
		let label = select_label(&FieldKeys::default(), &items(), &[], SelectionMode::Multi, &texts);
		assert_eq!(label, "Choose");
	}

	#[test]
	fn unresolved_and_unlabelled_ids_skip_tags_but_still_count() {
		let schema = FieldKeys::default();
		let items = items();
		let selected = [json!(2), json!(99), json!(3), json!(1)];

		let rendered = tags(&schema, &items, &selected);
		assert_eq!(
			rendered.iter().map(|tag| tag.label.as_str()).collect::<Vec<_>>(),
			vec!["Banana", "Apple"]
		);

		let summary = SelectionSummary::new(&schema, &items, &selected);
		assert_eq!(summary.selected_count, 4);
		assert_eq!(summary.resolved_count, 2);
		assert_eq!(summary.unresolved(), 2);

		let label = select_label(&schema, &items, &selected, SelectionMode::Multi, &SelectTexts::default());
		assert_eq!(label, "Select (4 selected)");
	}
}
