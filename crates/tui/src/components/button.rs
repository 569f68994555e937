use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

/// Right-aligned submit button below the list.
pub fn render_submit_button(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let label = Span::styled(
		format!(" {text} "),
		theme.header.add_modifier(Modifier::BOLD),
	);
	frame.render_widget(
		Paragraph::new(Line::from(label)).alignment(Alignment::Right),
		area,
	);
}
