//! Accessors that read identifiers and labels out of caller-owned items.
//!
//! The widget never inspects an item directly. It asks an [`ItemSchema`],
//! which lets the same logic drive loosely shaped JSON records (through
//! [`FieldKeys`] and its configurable field names) and plain Rust structs
//! (through [`Records`]).

use std::fmt;
use std::marker::PhantomData;

use serde_json::{Map, Value};

use crate::error::ItemError;

/// Field holding the identifier when none is configured.
pub const DEFAULT_UNIQUE_KEY: &str = "_id";
/// Field holding the display label when none is configured.
pub const DEFAULT_DISPLAY_KEY: &str = "name";
/// Field consulted for the optional disabled flag.
pub const DISABLED_KEY: &str = "disabled";

/// Describes how to read an item's identifier, label and disabled flag.
pub trait ItemSchema {
	/// Caller-owned record type.
	type Item;
	/// Identifier stored in the selection.
	type Id: Clone + PartialEq + fmt::Debug;

	/// Identifier of `item`, if it has one.
	fn id<'a>(&self, item: &'a Self::Item) -> Option<&'a Self::Id>;

	/// Display label of `item`, if it has one.
	fn label<'a>(&self, item: &'a Self::Item) -> Option<&'a str>;

	fn is_disabled(&self, _item: &Self::Item) -> bool {
		false
	}

	/// Build a brand new item from search text.
	///
	/// Schemas that cannot mint items return `None`, which turns the
	/// add-item action into a no-op.
	fn create(&self, _id: String, _label: &str) -> Option<Self::Item> {
		None
	}
}

/// Schema for JSON object items addressed by field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldKeys {
	/// Field holding the unique identifier.
	pub unique_key: String,
	/// Field holding the display label.
	pub display_key: String,
}

impl Default for FieldKeys {
	fn default() -> Self {
		Self::new(DEFAULT_UNIQUE_KEY, DEFAULT_DISPLAY_KEY)
	}
}

impl FieldKeys {
	#[must_use]
	pub fn new(unique_key: impl Into<String>, display_key: impl Into<String>) -> Self {
		Self {
			unique_key: unique_key.into(),
			display_key: display_key.into(),
		}
	}

	/// Validate a JSON document as a list of items.
	///
	/// Every entry must be an object carrying the unique key. Labels are not
	/// required: an item without one simply never matches a search and never
	/// renders as a tag.
	pub fn parse_items(&self, document: Value) -> Result<Vec<Value>, ItemError> {
		let Value::Array(entries) = document else {
			return Err(ItemError::not_an_array(&document));
		};

		for (index, entry) in entries.iter().enumerate() {
			let Some(object) = entry.as_object() else {
				return Err(ItemError::NotAnObject { index });
			};
			if object.get(&self.unique_key).is_none_or(Value::is_null) {
				return Err(ItemError::MissingKey {
					index,
					key: self.unique_key.clone(),
				});
			}
		}

		Ok(entries)
	}

	/// Interpret a textual identifier against the known items.
	///
	/// Command lines and environment variables only carry strings, while JSON
	/// items may use numeric identifiers. A raw value that spells out an
	/// existing non-string identifier resolves to that identifier; anything
	/// else stays a string.
	#[must_use]
	pub fn id_from_str(&self, items: &[Value], raw: &str) -> Value {
		items
			.iter()
			.filter_map(|item| self.id(item))
			.find(|id| match id {
				Value::String(text) => text == raw,
				other => other.to_string() == raw,
			})
			.cloned()
			.unwrap_or_else(|| Value::String(raw.to_string()))
	}
}

impl ItemSchema for FieldKeys {
	type Item = Value;
	type Id = Value;

	fn id<'a>(&self, item: &'a Value) -> Option<&'a Value> {
		item.get(&self.unique_key).filter(|id| !id.is_null())
	}

	fn label<'a>(&self, item: &'a Value) -> Option<&'a str> {
		item.get(&self.display_key).and_then(Value::as_str)
	}

	fn is_disabled(&self, item: &Value) -> bool {
		item.get(DISABLED_KEY)
			.and_then(Value::as_bool)
			.unwrap_or(false)
	}

	fn create(&self, id: String, label: &str) -> Option<Value> {
		let mut object = Map::new();
		object.insert(self.unique_key.clone(), Value::String(id));
		object.insert(self.display_key.clone(), Value::String(label.to_string()));
		Some(Value::Object(object))
	}
}

/// Statically typed items that know their own identifier and label.
pub trait Record: Sized {
	type Id: Clone + PartialEq + fmt::Debug;

	fn id(&self) -> &Self::Id;

	fn label(&self) -> &str;

	fn is_disabled(&self) -> bool {
		false
	}

	/// Construct a record from search text. Defaults to unsupported.
	fn from_search_term(_id: String, _label: &str) -> Option<Self> {
		None
	}
}

/// Schema adapter for any [`Record`] type.
pub struct Records<T>(PhantomData<fn() -> T>);

impl<T> Records<T> {
	#[must_use]
	pub const fn new() -> Self {
		Self(PhantomData)
	}
}

impl<T> Default for Records<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Clone for Records<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Records<T> {}

impl<T> fmt::Debug for Records<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Records")
	}
}

impl<T: Record> ItemSchema for Records<T> {
	type Item = T;
	type Id = T::Id;

	fn id<'a>(&self, item: &'a T) -> Option<&'a T::Id> {
		Some(item.id())
	}

	fn label<'a>(&self, item: &'a T) -> Option<&'a str> {
		Some(item.label())
	}

	fn is_disabled(&self, item: &T) -> bool {
		item.is_disabled()
	}

	fn create(&self, id: String, label: &str) -> Option<T> {
		T::from_search_term(id, label)
	}
}
