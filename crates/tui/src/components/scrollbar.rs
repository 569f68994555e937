//! Vertical scrollbar for the open list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Precomputed scrolling metrics for a scrollable viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	/// Total number of entries in the content.
	pub content_length: usize,
	/// Number of entries visible at once.
	pub viewport_len: usize,
	pub max_scroll: usize,
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Returns empty metrics if either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length).max(1);
		Self {
			content_length,
			viewport_len,
			max_scroll: content_length.saturating_sub(viewport_len),
			needs_scrollbar: content_length > viewport_len,
		}
	}

	/// Scrollbar state tracking `position` within the content.
	#[must_use]
	pub fn state(&self, position: usize) -> ScrollbarState {
		ScrollbarState::new(self.content_length)
			.viewport_content_length(self.viewport_len)
			.position(position.min(self.content_length.saturating_sub(1)))
	}
}

/// Render a themed scrollbar on the right edge of `area` and return the
/// area left for content.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	scrollbar_state: &mut ScrollbarState,
	theme: &Theme,
) -> Rect {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(Style::default().fg(theme.header.fg.unwrap_or(Color::Reset)));

	let bar_area = Rect {
		x: area.x + area.width.saturating_sub(1),
		y: area.y,
		width: 1,
		height: area.height,
	};
	frame.render_stateful_widget(scrollbar, bar_area, scrollbar_state);

	Rect {
		width: area.width.saturating_sub(1),
		..area
	}
}
