//! State container for the interactive picker.
//!
//! [`App`] is the owner in the controlled-component relationship: it keeps
//! the items and the selection, hands them to a fresh [`MultiSelect`] for
//! every interaction, and applies whatever the widget reports back.

use mselect_core::{ItemSchema, MultiSelect, SelectConfig, SelectView, SelectorState};
use ratatui::widgets::ListState;

use super::host::HostChanges;
use crate::input::SearchInput;
use crate::log_pane::LogPane;
use crate::outcome::PickOutcome;
use crate::style::{StyleConfig, Theme};

/// Aggregate state shared across the terminal UI.
pub struct App<'a, S: ItemSchema> {
	pub(crate) schema: S,
	pub(crate) items: Vec<S::Item>,
	pub(crate) selected: Vec<S::Id>,
	pub(crate) config: SelectConfig,
	pub(crate) selector: SelectorState,
	/// Text input mirroring the widget's search term.
	pub search_input: SearchInput<'a>,
	pub style: StyleConfig,
	/// Entry under the cursor in the open list, the add-item row last.
	pub(crate) cursor: usize,
	pub(crate) list_state: ListState,
	/// Tag focused for removal while the list is collapsed.
	pub(crate) tag_focus: Option<usize>,
	/// Identifiers of items created during this session.
	pub(crate) added: Vec<S::Id>,
	pub(crate) log_pane: LogPane,
}

impl<'a, S> App<'a, S>
where
	S: ItemSchema,
	S::Item: Clone,
{
	pub fn new(schema: S, items: Vec<S::Item>, selected: Vec<S::Id>, config: SelectConfig) -> Self {
		let mut app = Self {
			schema,
			items,
			selected,
			config,
			selector: SelectorState::new(),
			search_input: SearchInput::default(),
			style: StyleConfig::default(),
			cursor: 0,
			list_state: ListState::default(),
			tag_focus: None,
			added: Vec::new(),
			log_pane: LogPane::new(),
		};
		app.set_theme(app.style.theme);
		app
	}

	/// Start with the list expanded and `query` in the search box.
	pub fn open_with_query(&mut self, query: impl Into<String>) {
		self.selector = SelectorState::new().opened().with_search_term(query);
		self.sync_input();
	}

	/// Seed the search box without opening the list.
	pub fn set_initial_query(&mut self, query: impl Into<String>) {
		self.selector.set_search_term(query);
		self.sync_input();
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
		self.search_input.set_style(theme.prompt);
	}

	pub fn show_log_pane(&mut self, visible: bool) {
		self.log_pane.set_visible(visible);
	}

	#[must_use]
	pub fn items(&self) -> &[S::Item] {
		&self.items
	}

	#[must_use]
	pub fn selected(&self) -> &[S::Id] {
		&self.selected
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.selector.is_open()
	}

	/// The widget as it would render right now.
	#[must_use]
	pub fn widget(&self) -> MultiSelect<'_, S> {
		MultiSelect::new(&self.schema, &self.items, &self.selected, &self.config)
	}

	#[must_use]
	pub fn view(&self) -> SelectView<S::Id> {
		self.widget().view(&self.selector)
	}

	/// Run one widget transition and apply the changes it reports.
	pub(crate) fn interact<R>(
		&mut self,
		transition: impl FnOnce(
			MultiSelect<'_, S>,
			&mut SelectorState,
			&mut HostChanges<S::Id, S::Item>,
		) -> R,
	) -> R {
		let mut changes = HostChanges::default();
		let widget = MultiSelect::new(&self.schema, &self.items, &self.selected, &self.config);
		let result = transition(widget, &mut self.selector, &mut changes);

		if let Some(items) = changes.items {
			self.items = items;
		}
		if let Some(selection) = changes.selection {
			self.selected = selection;
		}
		self.sync_input();
		self.clamp_cursor();
		self.clamp_tag_focus();
		result
	}

	/// Number of entries the cursor can land on in the open list.
	pub(crate) fn entry_count(&self) -> usize {
		let widget = self.widget();
		let add_row = widget.add_item_label(&self.selector).is_some();
		widget.visible_items(&self.selector).len() + usize::from(add_row)
	}

	pub(crate) fn clamp_cursor(&mut self) {
		let count = self.entry_count();
		self.cursor = self.cursor.min(count.saturating_sub(1));
	}

	pub(crate) fn clamp_tag_focus(&mut self) {
		let count = self.widget().tags().len();
		self.tag_focus = match self.tag_focus {
			Some(_) if count == 0 => None,
			Some(focus) => Some(focus.min(count - 1)),
			None => None,
		};
	}

	pub(crate) fn outcome(&self, accepted: bool) -> PickOutcome<S::Id, S::Item> {
		PickOutcome {
			accepted,
			selected: self.selected.clone(),
			items: self.items.clone(),
			added: self.added.clone(),
			query: self.selector.search_term().to_string(),
		}
	}

	fn sync_input(&mut self) {
		self.search_input.set_text(self.selector.search_term());
	}
}
