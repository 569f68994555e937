use ratatui::style::{Color, Modifier, Style};

use crate::style::theme::{Theme, ThemeDefinition};

pub const NAME: &str = "light";

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	tag: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(203, 213, 225)),
	selected: Style::new().fg(Color::Rgb(21, 128, 61)),
	disabled: Style::new()
		.fg(Color::Rgb(148, 163, 184))
		.add_modifier(Modifier::CROSSED_OUT),
	danger: Style::new().fg(Color::Rgb(185, 28, 28)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, LIGHT);
