//! Search-term filtering and the add-item affordance.

use std::fmt;
use std::str::FromStr;

use log::warn;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::ParseFilterMethodError;
use crate::schema::ItemSchema;

/// How the search term is compared against item labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMethod {
	/// Split the term into tokens and keep labels matching any one of them.
	#[default]
	Tokens,
	/// Keep labels containing the whole term.
	Full,
}

impl FilterMethod {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Tokens => "tokens",
			Self::Full => "full",
		}
	}
}

impl fmt::Display for FilterMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FilterMethod {
	type Err = ParseFilterMethodError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"" | "tokens" | "token" | "default" => Ok(Self::Tokens),
			"full" => Ok(Self::Full),
			_ => Err(ParseFilterMethodError {
				value: value.to_string(),
			}),
		}
	}
}

/// Compiled form of a search term.
#[derive(Debug, Clone)]
pub enum Matcher {
	/// Blank term, or a term made only of separators.
	All,
	/// Lowercased, trimmed term that must appear verbatim.
	Substring(String),
	/// Case-insensitive alternation of the term's tokens.
	Tokens(Regex),
	/// Plain token list, used if the alternation could not be compiled.
	AnyOf(Vec<String>),
}

impl Matcher {
	#[must_use]
	pub fn new(term: &str, method: FilterMethod) -> Self {
		let term = term.trim().to_lowercase();
		if term.is_empty() {
			return Self::All;
		}

		match method {
			FilterMethod::Full => Self::Substring(term),
			FilterMethod::Tokens => Self::for_tokens(&term),
		}
	}

	fn for_tokens(term: &str) -> Self {
		let tokens: Vec<&str> = split_tokens(term).collect();
		if tokens.is_empty() {
			return Self::All;
		}

		let alternation = tokens
			.iter()
			.map(|token| regex::escape(token))
			.collect::<Vec<_>>()
			.join("|");
		match RegexBuilder::new(&format!("({alternation})"))
			.case_insensitive(true)
			.build()
		{
			Ok(regex) => Self::Tokens(regex),
			Err(err) => {
				warn!("falling back to plain token matching for {term:?}: {err}");
				Self::AnyOf(tokens.into_iter().map(str::to_string).collect())
			}
		}
	}

	#[must_use]
	pub fn matches(&self, label: &str) -> bool {
		match self {
			Self::All => true,
			Self::Substring(term) => label.to_lowercase().contains(term.as_str()),
			Self::Tokens(regex) => regex.is_match(label),
			Self::AnyOf(tokens) => {
				let label = label.to_lowercase();
				tokens.iter().any(|token| label.contains(token.as_str()))
			}
		}
	}
}

/// Split a search term on runs of whitespace, hyphens and colons.
pub fn split_tokens(term: &str) -> impl Iterator<Item = &str> {
	term.split(|ch: char| ch.is_whitespace() || ch == '-' || ch == ':')
		.filter(|token| !token.is_empty())
}

/// Everything that decides which items are listed.
#[derive(Debug, Clone, Copy)]
pub struct FilterQuery<'a, Id> {
	pub term: &'a str,
	pub method: FilterMethod,
	pub selected: &'a [Id],
	pub remove_selected: bool,
}

impl<'a, Id: PartialEq> FilterQuery<'a, Id> {
	/// Items to list, in their original order.
	pub fn apply<'i, S>(&self, schema: &S, items: &'i [S::Item]) -> Vec<(usize, &'i S::Item)>
	where
		S: ItemSchema<Id = Id>,
	{
		let matcher = Matcher::new(self.term, self.method);

		items
			.iter()
			.enumerate()
			.filter(|(_, item)| matcher.matches(schema.label(item).unwrap_or_default()))
			.filter(|(_, item)| {
				!self.remove_selected
					|| schema
						.id(item)
						.is_none_or(|id| !self.selected.contains(id))
			})
			.collect()
	}
}

/// Label of the add-item row, when it should be offered.
///
/// The row appears when creation is enabled, the term is not blank, and no
/// listed item is labelled with exactly the raw term.
pub fn add_item_candidate<'t, S: ItemSchema>(
	schema: &S,
	listed: &[(usize, &S::Item)],
	term: &'t str,
	can_add_items: bool,
) -> Option<&'t str> {
	if !can_add_items || term.trim().is_empty() {
		return None;
	}

	let exact = listed
		.iter()
		.any(|(_, item)| schema.label(item) == Some(term));
	(!exact).then_some(term)
}

/// Identifier given to an item created from `term`.
///
/// Each run of whitespace becomes a single `-`, so `"a  b"` gives `"a-b"`
/// rather than one hyphen per space.
#[must_use]
pub fn new_item_id(term: &str) -> String {
	term.split_whitespace().collect::<Vec<_>>().join("-")
}
