//! Single-line search box backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// The search text the user edits while the list is open.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
	style: Style,
}

impl<'a> SearchInput<'a> {
	#[must_use]
	pub fn new(initial: &str) -> Self {
		let mut input = Self {
			textarea: TextArea::new(vec![initial.to_string()]),
			style: Style::default(),
		};
		input.textarea.move_cursor(CursorMove::End);
		input.apply_style();
		input
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Replace the contents, keeping the cursor at the end. Does nothing when
	/// the text is unchanged so the cursor position survives.
	pub fn set_text(&mut self, text: &str) {
		if self.text() == text {
			return;
		}
		let mut textarea = TextArea::new(vec![text.to_string()]);
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
		self.apply_style();
	}

	pub fn set_style(&mut self, style: Style) {
		self.style = style;
		self.apply_style();
	}

	/// Feed a key to the text area. Returns `true` when the text changed.
	///
	/// Keys that would break the line are swallowed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m' | 'j')));
		if newline {
			return false;
		}
		self.textarea.input(key)
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}

	fn apply_style(&mut self) {
		self.textarea.set_style(self.style);
		self.textarea.set_cursor_line_style(Style::default());
	}
}

impl Default for SearchInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyEventKind, KeyEventState};

	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent {
			code,
			modifiers: KeyModifiers::NONE,
			kind: KeyEventKind::Press,
			state: KeyEventState::NONE,
		}
	}

	#[test]
	fn typing_appends_at_the_end() {
		let mut input = SearchInput::new("ap");
		assert!(input.input(key(KeyCode::Char('p'))));
		assert_eq!(input.text(), "app");
	}

	#[test]
	fn enter_never_breaks_the_line() {
		let mut input = SearchInput::new("apple");
		assert!(!input.input(key(KeyCode::Enter)));
		assert_eq!(input.text(), "apple");
	}

	#[test]
	fn set_text_replaces_contents() {
		let mut input = SearchInput::new("apple");
		input.set_text("");
		assert_eq!(input.text(), "");
		assert!(input.input(key(KeyCode::Char('x'))));
		assert_eq!(input.text(), "x");
	}
}
