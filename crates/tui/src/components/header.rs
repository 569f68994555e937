//! The collapsed select bar.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

pub const CHEVRON_DOWN: &str = "▾";

/// Render the select label with a chevron on the right edge.
pub fn render_header(frame: &mut Frame, area: Rect, label: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	frame.buffer_mut().set_style(area, theme.header);

	let label_area = Rect {
		width: area.width.saturating_sub(3),
		height: 1,
		..area
	};
	let line = Line::from(vec![Span::raw(" "), Span::raw(label)]).style(theme.header);
	frame.render_widget(Paragraph::new(line), label_area);

	if area.width >= 3 {
		frame
			.buffer_mut()
			.set_string(area.right() - 2, area.y, CHEVRON_DOWN, theme.header);
	}
}
