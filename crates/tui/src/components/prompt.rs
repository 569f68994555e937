use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};

use crate::input::SearchInput;
use crate::style::Theme;

pub const BACK_ARROW: &str = "←";
pub const CHEVRON_UP: &str = "▴";

/// Argument bundle for rendering the search row of the open list.
pub struct PromptContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	/// Shown while the search text is empty.
	pub placeholder: &'a str,
	/// Draw the back arrow that closes the list.
	pub back_arrow: bool,
	/// Draw the chevron standing in for a hidden submit button.
	pub submit_chevron: bool,
	pub area: Rect,
	pub theme: &'a Theme,
}

pub fn render_prompt(frame: &mut Frame, prompt: PromptContext<'_>) {
	let PromptContext {
		search_input,
		placeholder,
		back_arrow,
		submit_chevron,
		area,
		theme,
	} = prompt;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let arrow_width = if back_arrow { 2 } else { 0 };
	let chevron_width = if submit_chevron { 2 } else { 0 };
	let [arrow_area, input_area, chevron_area] = Layout::horizontal([
		Constraint::Length(arrow_width),
		Constraint::Fill(1),
		Constraint::Length(chevron_width),
	])
	.areas(Rect { height: 1, ..area });

	if back_arrow {
		frame
			.buffer_mut()
			.set_string(arrow_area.x, arrow_area.y, BACK_ARROW, theme.prompt);
	}

	search_input.render(frame, input_area);
	if search_input.text().is_empty() {
		render_placeholder(frame, input_area, placeholder, theme);
	}

	if submit_chevron {
		frame
			.buffer_mut()
			.set_string(chevron_area.x, chevron_area.y, CHEVRON_UP, theme.prompt);
	}
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || text.is_empty() {
		return;
	}
	let display_text: String = text.chars().take(area.width as usize).collect();
	frame.buffer_mut().set_line(
		area.left(),
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		area.width,
	);
}
