use ratatui::style::{Color, Modifier, Style};

/// Styles for every element the picker draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Collapsed header bar carrying the select label.
	pub header: Style,
	/// Cursor row of the open list.
	pub row_highlight: Style,
	/// Search prompt and typed text.
	pub prompt: Style,
	/// Placeholder text and the empty-list message.
	pub empty: Style,
	/// Add-item row and focused tag.
	pub highlight: Style,
	/// Unfocused selection tags.
	pub tag: Style,
	/// Check mark and label of selected rows.
	pub selected: Style,
	/// Rows that cannot be toggled.
	pub disabled: Style,
	/// Tag removal marker.
	pub danger: Style,
}

impl Theme {
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	/// Style of a focused tag: the tag colours swapped.
	#[must_use]
	pub fn focused_tag_style(&self) -> Style {
		Style::new()
			.fg(self.tag.bg.unwrap_or(Color::Reset))
			.bg(self.tag.fg.unwrap_or(Color::Reset))
			.add_modifier(Modifier::BOLD)
	}

	/// Border colour shared by the list and the log pane.
	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::new().fg(self.header.bg.unwrap_or(Color::Reset))
	}
}

/// A theme known at compile time.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
	pub const fn new(name: &'static str, theme: Theme) -> Self {
		Self {
			name,
			theme,
			aliases: &[],
		}
	}

	pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
		self.aliases = aliases;
		self
	}

	/// Whether `name` is this theme's name or one of its aliases, ignoring case.
	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		let name = name.trim();
		self.name.eq_ignore_ascii_case(name)
			|| self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
