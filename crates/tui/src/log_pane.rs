//! In-UI console for log records captured by `tui-logger`.

use log::LevelFilter;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Clear};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget, TuiWidgetEvent, TuiWidgetState};

use crate::style::Theme;

/// Toggleable pane showing the runtime log.
pub struct LogPane {
	state: TuiWidgetState,
	visible: bool,
}

impl LogPane {
	#[must_use]
	pub fn new() -> Self {
		Self {
			state: TuiWidgetState::new().set_default_display_level(LevelFilter::Debug),
			visible: false,
		}
	}

	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	pub fn set_visible(&mut self, visible: bool) {
		self.visible = visible;
	}

	pub fn toggle(&mut self) {
		self.visible = !self.visible;
	}

	/// Page through the log history. Returns `true` when the key was used.
	pub fn handle_key(&self, key: KeyEvent) -> bool {
		if !self.visible {
			return false;
		}
		let event = match key.code {
			KeyCode::PageUp => TuiWidgetEvent::PrevPageKey,
			KeyCode::PageDown => TuiWidgetEvent::NextPageKey,
			_ => return false,
		};
		self.state.transition(event);
		true
	}

	pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		frame.render_widget(Clear, area);
		if area.width == 0 || area.height == 0 {
			return;
		}

		let widget = TuiLoggerWidget::default()
			.block(
				Block::bordered()
					.title(" Log ")
					.border_style(theme.border_style()),
			)
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.output_target(false)
			.output_file(false)
			.output_line(false)
			.style_error(theme.danger)
			.style_warn(theme.highlight)
			.style_debug(theme.empty)
			.state(&self.state);
		frame.render_widget(widget, area);
	}
}

impl Default for LogPane {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::crossterm::event::KeyModifiers;

	use super::*;

	#[test]
	fn hidden_pane_ignores_paging_keys() {
		let mut pane = LogPane::new();
		let page_up = KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE);
		assert!(!pane.handle_key(page_up));

		pane.toggle();
		assert!(pane.is_visible());
		assert!(pane.handle_key(page_up));
		assert!(!pane.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
	}

	#[test]
	fn renders_inside_a_titled_block() {
		let pane = LogPane::new();
		let mut terminal = Terminal::new(TestBackend::new(30, 5)).expect("terminal");
		terminal
			.draw(|frame| pane.render(frame, frame.area(), &Theme::default()))
			.expect("draw log pane");

		let top: String = (0..30)
			.map(|x| terminal.backend().buffer()[(x, 0)].symbol().to_string())
			.collect();
		assert!(top.contains("Log"));
	}
}
