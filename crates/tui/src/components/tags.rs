//! Removable chips for the current selection.
//!
//! Chips are packed greedily into as many lines as the width requires.

use mselect_core::TagView;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::style::Theme;

pub const REMOVE_MARK: &str = "×";

/// Display width of one chip. Its padding doubles as the gap to the next chip.
#[must_use]
pub fn chip_width(label: &str) -> usize {
	label.width() + REMOVE_MARK.width() + 3
}

/// Lay the chips out into lines no wider than `width`.
///
/// A chip wider than the whole line still gets a line of its own.
#[must_use]
pub fn tag_lines<Id>(
	tags: &[TagView<Id>],
	focused: Option<usize>,
	width: u16,
	theme: &Theme,
) -> Vec<Line<'static>> {
	let width = usize::from(width);
	let mut lines = Vec::new();
	let mut current: Vec<Span<'static>> = Vec::new();
	let mut used = 0;

	for (index, tag) in tags.iter().enumerate() {
		let chip = chip_width(&tag.label);
		if !current.is_empty() && used + chip > width {
			lines.push(Line::from(std::mem::take(&mut current)));
			used = 0;
		}

		let style = if focused == Some(index) {
			theme.focused_tag_style()
		} else {
			theme.tag
		};
		current.push(Span::styled(format!(" {} ", tag.label), style));
		current.push(Span::styled(REMOVE_MARK, theme.danger.bg(style.bg.unwrap_or(Color::Reset))));
		current.push(Span::styled(" ", style));
		used += chip;
	}
	if !current.is_empty() {
		lines.push(Line::from(current));
	}
	lines
}

pub fn render_tags(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	frame.render_widget(Paragraph::new(lines).style(Style::default()), area);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tag(label: &str) -> TagView<u32> {
		TagView {
			id: 0,
			label: label.to_string(),
		}
	}

	fn plain(line: &Line<'_>) -> String {
		line.spans.iter().map(|span| span.content.as_ref()).collect()
	}

	#[test]
	fn chips_pack_until_the_width_runs_out() {
		let tags = [tag("Apple"), tag("Banana"), tag("Cherry")];
		let lines = tag_lines(&tags, None, 20, &Theme::default());

		let text: Vec<String> = lines.iter().map(plain).collect();
		assert_eq!(text, vec![" Apple ×  Banana × ", " Cherry × "]);
	}

	#[test]
	fn adjacent_chips_are_two_spaces_apart() {
		let tags = [tag("A"), tag("B")];
		let lines = tag_lines(&tags, None, 80, &Theme::default());
		assert_eq!(plain(&lines[0]), " A ×  B × ");
		assert_eq!(lines[0].width(), chip_width("A") + chip_width("B"));
	}

	#[test]
	fn oversized_chip_gets_its_own_line() {
		let tags = [tag("Apple"), tag("A very long label indeed")];
		let lines = tag_lines(&tags, None, 12, &Theme::default());
		assert_eq!(lines.len(), 2);
	}

	#[test]
	fn focused_chip_uses_focus_style() {
		let theme = Theme::default();
		let tags = [tag("Apple"), tag("Banana")];
		let lines = tag_lines(&tags, Some(1), 80, &theme);

		let styles: Vec<Style> = lines[0].spans.iter().map(|span| span.style).collect();
		assert_eq!(styles[0], theme.tag);
		assert_eq!(styles[3], theme.focused_tag_style());
	}

	#[test]
	fn no_tags_no_lines() {
		let lines = tag_lines::<u32>(&[], None, 40, &Theme::default());
		assert!(lines.is_empty());
	}
}
