use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, warn};
use mselect::filter::new_item_id;
use mselect::{FieldKeys, ItemSchema, PickOutcome, Picker};
use serde_json::Value;

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive picker.
pub(crate) struct PickWorkflow {
	picker: Picker<FieldKeys>,
}

impl PickWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let picker = PickerFactory::build(config)?;
		Ok(Self { picker })
	}

	pub(crate) fn run(self) -> Result<PickOutcome<Value, Value>> {
		self.picker.run()
	}
}

/// Helper for translating resolved configuration into a configured [`Picker`].
struct PickerFactory {
	schema: FieldKeys,
	picker: Picker<FieldKeys>,
}

impl PickerFactory {
	fn build(config: ResolvedConfig) -> Result<Picker<FieldKeys>> {
		let ResolvedConfig {
			items_file,
			labels,
			schema,
			selected,
			select,
			initial_query,
			open,
			theme,
			log_level: _,
			log_file: _,
		} = config;

		let items = match items_file {
			Some(path) => load_items(&schema, &path)?,
			None => items_from_labels(&schema, &labels),
		};
		debug!("loaded {} items", items.len());

		let builder = Self::new(schema, items)
			.with_selected(&selected)
			.with_config(select)
			.with_initial_query(initial_query)
			.open_on_start(open)
			.with_theme(theme);

		Ok(builder.finish())
	}

	fn new(schema: FieldKeys, items: Vec<Value>) -> Self {
		let picker = Picker::new(schema.clone(), items);
		Self { schema, picker }
	}

	fn with_selected(mut self, raw_ids: &[String]) -> Self {
		if raw_ids.is_empty() {
			return self;
		}
		let items = self.picker.items();
		let ids = raw_ids
			.iter()
			.map(|raw| self.schema.id_from_str(items, raw))
			.collect();
		self.picker = self.picker.with_selected(ids);
		self
	}

	fn with_config(mut self, config: mselect::SelectConfig) -> Self {
		self.picker = self.picker.with_config(config);
		self
	}

	fn with_initial_query(mut self, query: String) -> Self {
		self.picker = self.picker.with_initial_query(query);
		self
	}

	fn open_on_start(mut self, open: bool) -> Self {
		self.picker = self.picker.open_on_start(open);
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Self {
		if let Some(theme) = theme {
			self.picker = self.picker.with_theme_name(&theme);
		}
		self
	}

	fn finish(self) -> Picker<FieldKeys> {
		self.picker
	}
}

/// Read and validate a JSON array of items.
fn load_items(schema: &FieldKeys, path: &Path) -> Result<Vec<Value>> {
	let contents = fs::read_to_string(path)
		.with_context(|| format!("failed to read items from {}", path.display()))?;
	let document: Value = serde_json::from_str(&contents)
		.with_context(|| format!("failed to parse items in {}", path.display()))?;
	schema
		.parse_items(document)
		.with_context(|| format!("invalid items in {}", path.display()))
}

/// Build items from bare labels. The identifier is derived from the label.
fn items_from_labels(schema: &FieldKeys, labels: &[String]) -> Vec<Value> {
	let mut seen = HashSet::new();
	let mut items = Vec::with_capacity(labels.len());
	for label in labels {
		let label = label.trim();
		if label.is_empty() {
			continue;
		}
		let id = new_item_id(label);
		if !seen.insert(id.clone()) {
			warn!("skipping duplicate item {label:?}");
			continue;
		}
		if let Some(item) = schema.create(id, label) {
			items.push(item);
		}
	}
	items
}
