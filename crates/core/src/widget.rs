//! The controlled multi-select component.
//!
//! [`MultiSelect`] borrows its props for the duration of one interaction and
//! is rebuilt by the owner after every change, the same way a parent view
//! re-renders a child. Transitions mutate the caller's [`SelectorState`] and
//! report everything else through a [`SelectHandler`].

use log::debug;

use crate::config::SelectConfig;
use crate::display::{self, SelectionSummary, TagView};
use crate::filter::{self, FilterQuery};
use crate::handler::SelectHandler;
use crate::schema::ItemSchema;
use crate::selection;
use crate::state::SelectorState;

/// Props of one render: the schema, the owner's items and selection, and
/// the configuration.
pub struct MultiSelect<'a, S: ItemSchema> {
	schema: &'a S,
	items: &'a [S::Item],
	selected: &'a [S::Id],
	config: &'a SelectConfig,
}

impl<S: ItemSchema> Clone for MultiSelect<'_, S> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<S: ItemSchema> Copy for MultiSelect<'_, S> {}

/// One row of the open list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
	/// Position of the item in the owner's item list.
	pub index: usize,
	pub label: String,
	pub selected: bool,
	pub disabled: bool,
}

/// Everything needed to draw the widget, derived from props and state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView<Id> {
	pub open: bool,
	pub search_term: String,
	/// Collapsed header text.
	pub label: String,
	pub rows: Vec<RowView>,
	/// Raw search text offered as a new item.
	pub add_item: Option<String>,
	/// Message for an open list without rows.
	pub empty_message: Option<String>,
	pub tags: Vec<TagView<Id>>,
	pub summary: SelectionSummary,
	pub show_tags: bool,
	pub show_submit_button: bool,
	pub show_back_arrow: bool,
	pub placeholder: String,
	pub submit_text: String,
}

impl<'a, S: ItemSchema> MultiSelect<'a, S> {
	#[must_use]
	pub fn new(
		schema: &'a S,
		items: &'a [S::Item],
		selected: &'a [S::Id],
		config: &'a SelectConfig,
	) -> Self {
		Self {
			schema,
			items,
			selected,
			config,
		}
	}

	#[must_use]
	pub fn config(&self) -> &'a SelectConfig {
		self.config
	}

	#[must_use]
	pub fn items(&self) -> &'a [S::Item] {
		self.items
	}

	#[must_use]
	pub fn selected(&self) -> &'a [S::Id] {
		self.selected
	}

	#[must_use]
	pub fn is_selected(&self, item: &S::Item) -> bool {
		self.schema
			.id(item)
			.is_some_and(|id| self.selected.contains(id))
	}

	/// Items listed for the current search text, paired with their index in
	/// the owner's list.
	#[must_use]
	pub fn visible_items(&self, state: &SelectorState) -> Vec<(usize, &'a S::Item)> {
		FilterQuery {
			term: state.search_term(),
			method: self.config.filter_method,
			selected: self.selected,
			remove_selected: self.config.remove_selected,
		}
		.apply(self.schema, self.items)
	}

	/// Label of the add-item row, if it should be offered.
	#[must_use]
	pub fn add_item_label<'s>(&self, state: &'s SelectorState) -> Option<&'s str> {
		let listed = self.visible_items(state);
		filter::add_item_candidate(
			self.schema,
			&listed,
			state.search_term(),
			self.config.can_add_items,
		)
	}

	#[must_use]
	pub fn label(&self) -> String {
		display::select_label(
			self.schema,
			self.items,
			self.selected,
			self.config.mode(),
			&self.config.texts,
		)
	}

	#[must_use]
	pub fn tags(&self) -> Vec<TagView<S::Id>> {
		display::tags(self.schema, self.items, self.selected)
	}

	#[must_use]
	pub fn summary(&self) -> SelectionSummary {
		SelectionSummary::new(self.schema, self.items, self.selected)
	}

	/// Derive the full display model.
	#[must_use]
	pub fn view(&self, state: &SelectorState) -> SelectView<S::Id> {
		let config = self.config;
		let listed = self.visible_items(state);
		let add_item = filter::add_item_candidate(
			self.schema,
			&listed,
			state.search_term(),
			config.can_add_items,
		)
		.map(str::to_string);

		let rows: Vec<RowView> = listed
			.iter()
			.map(|&(index, item)| RowView {
				index,
				label: self.schema.label(item).unwrap_or_default().to_string(),
				selected: self.is_selected(item),
				disabled: self.schema.is_disabled(item),
			})
			.collect();

		let tags = self.tags();
		let summary = SelectionSummary {
			selected_count: self.selected.len(),
			resolved_count: tags.len(),
		};
		let open = state.is_open();
		let empty_message =
			(open && rows.is_empty()).then(|| config.texts.no_items_text.clone());

		SelectView {
			open,
			search_term: state.search_term().to_string(),
			label: self.label(),
			rows,
			add_item,
			empty_message,
			tags,
			summary,
			show_tags: !config.single && !config.hide_tags && !self.selected.is_empty(),
			show_submit_button: open && !config.single && !config.hide_submit_button,
			show_back_arrow: !config.hide_dropdown,
			placeholder: config.texts.placeholder.clone(),
			submit_text: config.texts.submit_text.clone(),
		}
	}

	/// Record typed search text.
	pub fn change_input<H>(&self, state: &mut SelectorState, text: impl Into<String>, handler: &mut H)
	where
		H: SelectHandler<S::Id, S::Item>,
	{
		let text = text.into();
		handler.on_change_input(&text);
		state.set_search_term(text);
	}

	/// Open or collapse the list from the header.
	pub fn toggle_selector<H>(&self, state: &mut SelectorState, handler: &mut H)
	where
		H: SelectHandler<S::Id, S::Item>,
	{
		state.toggle();
		handler.on_toggle_list();
	}

	/// Close the list through the back arrow, discarding the search text.
	pub fn clear_selector<H>(&self, state: &mut SelectorState, handler: &mut H)
	where
		H: SelectHandler<S::Id, S::Item>,
	{
		state.submit();
		handler.on_clear_selector();
	}

	/// Close the list through the submit button.
	pub fn submit(&self, state: &mut SelectorState) {
		state.submit();
	}

	/// Choose `item` from the list.
	///
	/// Returns `false` when nothing happened because the item is disabled or
	/// has no identifier.
	pub fn toggle_item<H>(&self, state: &mut SelectorState, item: &S::Item, handler: &mut H) -> bool
	where
		H: SelectHandler<S::Id, S::Item>,
	{
		if self.schema.is_disabled(item) {
			debug!("ignoring toggle of disabled item");
			return false;
		}
		let Some(id) = self.schema.id(item) else {
			debug!("ignoring toggle of item without identifier");
			return false;
		};

		let toggled = selection::toggle(self.selected, id, self.config.mode());
		if toggled.submit {
			state.submit();
		}
		debug!("selection changed to {:?}", toggled.selection);
		handler.on_selected_items_change(toggled.selection);
		true
	}

	/// Drop `id` from the selection. The item list is untouched.
	pub fn remove_tag<H>(&self, id: &S::Id, handler: &mut H)
	where
		H: SelectHandler<S::Id, S::Item>,
	{
		let next = selection::remove(self.selected, id);
		debug!("tag {id:?} removed, selection is now {next:?}");
		handler.on_selected_items_change(next);
	}

	/// Create an item from the search text, append it to the owner's items
	/// and select it.
	///
	/// Does nothing unless the add-item row is currently offered and the
	/// schema can build items. Returns the new identifier.
	pub fn add_item<H>(&self, state: &mut SelectorState, handler: &mut H) -> Option<S::Id>
	where
		H: SelectHandler<S::Id, S::Item>,
		S::Item: Clone,
	{
		let term = self.add_item_label(state)?;
		let item = self.schema.create(filter::new_item_id(term), term)?;
		let id = self.schema.id(&item)?.clone();

		let mut items = self.items.to_vec();
		items.push(item);
		debug!("adding item {id:?} from search text {term:?}");
		handler.on_add_item(items);
		handler.on_selected_items_change(selection::append(self.selected, &id));
		state.clear_search();
		Some(id)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::{Value, json};

	use super::*;
	use crate::filter::FilterMethod;
	use crate::schema::FieldKeys;

	#[derive(Default)]
	struct Recorder {
		selection: Option<Vec<Value>>,
		items: Option<Vec<Value>>,
		inputs: Vec<String>,
		toggles: usize,
		clears: usize,
	}

	impl SelectHandler<Value, Value> for Recorder {
		fn on_selected_items_change(&mut self, selection: Vec<Value>) {
			self.selection = Some(selection);
		}

		fn on_add_item(&mut self, items: Vec<Value>) {
			self.items = Some(items);
		}

		fn on_change_input(&mut self, text: &str) {
			self.inputs.push(text.to_string());
		}

		fn on_clear_selector(&mut self) {
			self.clears += 1;
		}

		fn on_toggle_list(&mut self) {
			self.toggles += 1;
		}
	}

	fn items() -> Vec<Value> {
		vec![
			json!({ "_id": 1, "name": "Apple" }),
			json!({ "_id": 2, "name": "Banana" }),
			json!({ "_id": 3, "name": "Cherry", "disabled": true }),
		]
	}

	#[test]
	fn typing_notifies_and_filters() {
		let schema = FieldKeys::default();
		let items = items();
		let config = SelectConfig::default();
		let widget = MultiSelect::new(&schema, &items, &[], &config);
		let mut state = SelectorState::new().opened();
		let mut recorder = Recorder::default();

		widget.change_input(&mut state, "an", &mut recorder);

		assert_eq!(recorder.inputs, vec!["an"]);
		let view = widget.view(&state);
		assert_eq!(
			view.rows,
			vec![RowView {
				index: 1,
				label: "Banana".into(),
				selected: false,
				disabled: false
			}]
		);
	}

	#[test]
	fn single_mode_pick_replaces_selection_and_closes() {
		let schema = FieldKeys::default();
		let items = items();
		let selected = [json!(1)];
		let config = SelectConfig {
			single: true,
			..SelectConfig::default()
		};
		let widget = MultiSelect::new(&schema, &items, &selected, &config);
		let mut state = SelectorState::new().opened().with_search_term("ban");
		let mut recorder = Recorder::default();

		assert!(widget.toggle_item(&mut state, &items[1], &mut recorder));

		assert_eq!(recorder.selection, Some(vec![json!(2)]));
		assert!(!state.is_open());
		assert_eq!(state.search_term(), "");
	}

	#[test]
	fn multi_mode_pick_keeps_list_open() {
		let schema = FieldKeys::default();
		let items = items();
		let selected = [json!(2)];
		let config = SelectConfig::default();
		let widget = MultiSelect::new(&schema, &items, &selected, &config);
		let mut state = SelectorState::new().opened();
		let mut recorder = Recorder::default();

		widget.toggle_item(&mut state, &items[0], &mut recorder);

		assert_eq!(recorder.selection, Some(vec![json!(2), json!(1)]));
		assert!(state.is_open());
	}

	#[test]
	fn disabled_items_cannot_be_toggled() {
		let schema = FieldKeys::default();
		let items = items();
		let config = SelectConfig::default();
		let widget = MultiSelect::new(&schema, &items, &[], &config);
		let mut state = SelectorState::new().opened();
		let mut recorder = Recorder::default();

		assert!(!widget.toggle_item(&mut state, &items[2], &mut recorder));
		assert_eq!(recorder.selection, None);
		assert!(widget.view(&state).rows[2].disabled);
	}

	#[test]
	fn removing_a_tag_leaves_items_alone() {
		let schema = FieldKeys::default();
		let items = items();
		let selected = [json!(1), json!(2)];
		let config = SelectConfig::default();
		let widget = MultiSelect::new(&schema, &items, &selected, &config);
		let mut recorder = Recorder::default();

		widget.remove_tag(&json!(1), &mut recorder);

		assert_eq!(recorder.selection, Some(vec![json!(2)]));
		assert_eq!(recorder.items, None);
	}

	#[test]
	fn adding_an_item_appends_to_items_and_selection() {
		let schema = FieldKeys::default();
		let items = items();
		let selected = [json!(2)];
		let config = SelectConfig {
			can_add_items: true,
			..SelectConfig::default()
		};
		let widget = MultiSelect::new(&schema, &items, &selected, &config);
		let mut state = SelectorState::new().opened().with_search_term("Dragon  fruit");
		let mut recorder = Recorder::default();

		assert_eq!(widget.view(&state).add_item.as_deref(), Some("Dragon  fruit"));
		let id = widget.add_item(&mut state, &mut recorder);

		assert_eq!(id, Some(json!("Dragon-fruit")));
		let added = recorder.items.expect("items were extended");
		assert_eq!(added.len(), 4);
		assert_eq!(added[3], json!({ "_id": "Dragon-fruit", "name": "Dragon  fruit" }));
		assert_eq!(recorder.selection, Some(vec![json!(2), json!("Dragon-fruit")]));
		assert_eq!(state.search_term(), "");
		assert!(state.is_open());
	}

	#[test]
	fn add_item_is_ignored_when_a_label_matches_exactly() {
		let schema = FieldKeys::default();
		let items = items();
		let config = SelectConfig {
			can_add_items: true,
			..SelectConfig::default()
		};
		let widget = MultiSelect::new(&schema, &items, &[], &config);
		let mut state = SelectorState::new().opened().with_search_term("Apple");
		let mut recorder = Recorder::default();

		assert_eq!(widget.add_item(&mut state, &mut recorder), None);
		assert_eq!(recorder.items, None);
		assert_eq!(state.search_term(), "Apple");
	}

	#[test]
	fn back_arrow_and_header_notify_owner() {
		let schema = FieldKeys::default();
		let items = items();
		let config = SelectConfig::default();
		let widget = MultiSelect::new(&schema, &items, &[], &config);
		let mut state = SelectorState::new();
		let mut recorder = Recorder::default();

		widget.toggle_selector(&mut state, &mut recorder);
		assert!(state.is_open());
		widget.change_input(&mut state, "app", &mut recorder);
		widget.clear_selector(&mut state, &mut recorder);

		assert!(!state.is_open());
		assert_eq!(state.search_term(), "");
		assert_eq!(recorder.toggles, 1);
		assert_eq!(recorder.clears, 1);
	}

	#[test]
	fn view_flags_follow_mode_and_config() {
		let schema = FieldKeys::default();
		let items = items();
		let selected = [json!(1), json!(77)];
		let config = SelectConfig {
			filter_method: FilterMethod::Full,
			..SelectConfig::default()
		};
		let widget = MultiSelect::new(&schema, &items, &selected, &config);

		let closed = widget.view(&SelectorState::new());
		assert!(closed.show_tags);
		assert!(!closed.show_submit_button);
		assert_eq!(closed.empty_message, None);
		assert_eq!(closed.label, "Select (2 selected)");
		assert_eq!(closed.summary.selected_count, 2);
		assert_eq!(closed.summary.resolved_count, 1);

		let open = widget.view(&SelectorState::new().opened().with_search_term("zzz"));
		assert!(open.show_submit_button);
		assert!(open.rows.is_empty());
		assert_eq!(open.empty_message.as_deref(), Some("No items to display."));

		let single = SelectConfig {
			single: true,
			..SelectConfig::default()
		};
		let widget = MultiSelect::new(&schema, &items, &selected, &single);
		let view = widget.view(&SelectorState::new().opened());
		assert!(!view.show_tags);
		assert!(!view.show_submit_button);
		assert_eq!(view.label, "Apple");
	}
}
