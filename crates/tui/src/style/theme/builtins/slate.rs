use ratatui::style::{Color, Modifier, Style};

use crate::style::theme::{Theme, ThemeDefinition};

pub const NAME: &str = "slate";

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	tag: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(51, 65, 85)),
	selected: Style::new().fg(Color::Rgb(74, 222, 128)),
	disabled: Style::new()
		.fg(Color::Rgb(100, 116, 139))
		.add_modifier(Modifier::CROSSED_OUT),
	danger: Style::new().fg(Color::Rgb(248, 113, 113)),
};

pub const DEFINITION: ThemeDefinition = ThemeDefinition::new(NAME, SLATE).with_aliases(&["dark"]);
