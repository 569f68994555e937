//! The open list: matching rows, the add-item row and the empty message.

use mselect_core::RowView;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, HighlightSpacing, List, ListItem, ListState, Paragraph};

use super::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

pub const HIGHLIGHT_SYMBOL: &str = "› ";
pub const CHECK_MARK: &str = "✓ ";

/// Argument bundle for [`render_list`].
pub struct ListContext<'a> {
	pub rows: &'a [RowView],
	/// Search text offered as a new item.
	pub add_item: Option<&'a str>,
	pub empty_message: Option<&'a str>,
	/// Entry under the cursor, counting the add-item row last.
	pub cursor: usize,
	pub theme: &'a Theme,
}

/// Text of the add-item row.
#[must_use]
pub fn add_item_text(term: &str) -> String {
	format!("+ Add {term} (press enter)")
}

pub fn render_list(
	frame: &mut Frame,
	area: Rect,
	context: ListContext<'_>,
	list_state: &mut ListState,
) {
	let ListContext {
		rows,
		add_item,
		empty_message,
		cursor,
		theme,
	} = context;

	let block = Block::bordered().border_style(theme.border_style());
	let inner = block.inner(area);
	frame.render_widget(block, area);
	if inner.width == 0 || inner.height == 0 {
		return;
	}

	let mut entries_area = inner;
	if let Some(message) = empty_message {
		let message_area = Rect { height: 1, ..inner };
		frame.render_widget(
			Paragraph::new(message)
				.style(theme.danger)
				.alignment(Alignment::Center),
			message_area,
		);
		entries_area.y += 1;
		entries_area.height -= 1;
	}

	let mut entries: Vec<ListItem> = rows.iter().map(|row| row_item(row, theme)).collect();
	if let Some(term) = add_item {
		entries.push(ListItem::new(Line::styled(add_item_text(term), theme.highlight)));
	}
	if entries.is_empty() || entries_area.height == 0 {
		list_state.select(None);
		return;
	}

	let metrics = ScrollMetrics::compute(entries.len(), entries_area.height as usize);
	let content_area = if metrics.needs_scrollbar {
		let mut scrollbar_state = metrics.state(cursor);
		render_scrollbar(frame, entries_area, &mut scrollbar_state, theme)
	} else {
		entries_area
	};

	list_state.select(Some(cursor.min(entries.len() - 1)));
	let list = List::new(entries)
		.highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL)
		.highlight_spacing(HighlightSpacing::Always);
	frame.render_stateful_widget(list, content_area, list_state);
}

fn row_item<'a>(row: &'a RowView, theme: &Theme) -> ListItem<'a> {
	let mark = if row.selected { CHECK_MARK } else { "  " };
	let label_style = if row.disabled {
		theme.disabled
	} else if row.selected {
		theme.selected
	} else {
		Style::default()
	};
	ListItem::new(Line::from(vec![
		Span::styled(mark, theme.selected),
		Span::styled(row.label.as_str(), label_style),
	]))
}
