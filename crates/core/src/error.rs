use thiserror::Error;

/// Returned when a filter method name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown filter method '{value}' (expected 'tokens' or 'full')")]
pub struct ParseFilterMethodError {
	pub value: String,
}

/// Problems found while reading caller-supplied JSON items.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
	/// The item document was not a JSON array.
	#[error("expected a JSON array of items, found {found}")]
	NotAnArray { found: &'static str },

	/// An entry of the array was not an object.
	#[error("item {index} is not an object")]
	NotAnObject { index: usize },

	/// An entry has no usable identifier field.
	#[error("item {index} has no '{key}' field")]
	MissingKey { index: usize, key: String },
}

impl ItemError {
	pub(crate) fn not_an_array(value: &serde_json::Value) -> Self {
		let found = match value {
			serde_json::Value::Null => "null",
			serde_json::Value::Bool(_) => "a boolean",
			serde_json::Value::Number(_) => "a number",
			serde_json::Value::String(_) => "a string",
			serde_json::Value::Array(_) => "an array",
			serde_json::Value::Object(_) => "an object",
		};
		Self::NotAnArray { found }
	}
}
