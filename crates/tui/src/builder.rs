use anyhow::Result;
use log::warn;
use mselect_core::{ItemSchema, SelectConfig};

use crate::App;
use crate::outcome::PickOutcome;
use crate::style::{Theme, by_name};

/// A small builder for configuring the interactive picker before running it.
pub struct Picker<S: ItemSchema> {
	schema: S,
	items: Vec<S::Item>,
	selected: Vec<S::Id>,
	config: SelectConfig,
	initial_query: String,
	open: bool,
	theme: Option<Theme>,
	log_pane: bool,
}

impl<S> Picker<S>
where
	S: ItemSchema,
	S::Item: Clone,
{
	pub fn new(schema: S, items: Vec<S::Item>) -> Self {
		Self {
			schema,
			items,
			selected: Vec::new(),
			config: SelectConfig::default(),
			initial_query: String::new(),
			open: false,
			theme: None,
			log_pane: false,
		}
	}

	/// Items the picker will start with.
	pub fn items(&self) -> &[S::Item] {
		&self.items
	}

	pub fn with_selected(mut self, selected: Vec<S::Id>) -> Self {
		self.selected = selected;
		self
	}

	pub fn with_config(mut self, config: SelectConfig) -> Self {
		self.config = config;
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	/// Start with the list expanded.
	pub fn open_on_start(mut self, open: bool) -> Self {
		self.open = open;
		self
	}

	/// Use the named theme. Unknown names keep the default theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => warn!("unknown theme {name:?}, keeping the default"),
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Show the log pane from the first frame.
	pub fn with_log_pane(mut self, visible: bool) -> Self {
		self.log_pane = visible;
		self
	}

	/// Assemble the [`App`] without touching the terminal.
	pub fn build<'a>(self) -> App<'a, S> {
		let mut app = App::new(self.schema, self.items, self.selected, self.config);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if self.open {
			app.open_with_query(self.initial_query);
		} else if !self.initial_query.is_empty() {
			app.set_initial_query(self.initial_query);
		}
		app.show_log_pane(self.log_pane);
		app
	}

	/// Run the interactive picker with the configured options.
	pub fn run(self) -> Result<PickOutcome<S::Id, S::Item>> {
		let mut app = self.build();
		app.run()
	}
}
