use mselect_core::ItemSchema;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};

use super::App;
use crate::components::{
	ListContext, PromptContext, render_header, render_list, render_prompt, render_submit_button,
	render_tags, tag_lines,
};

impl<S> App<'_, S>
where
	S: ItemSchema,
	S::Item: Clone,
{
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let (picker_area, log_area) = if self.log_pane.is_visible() {
			let [picker, log] =
				Layout::vertical([Constraint::Fill(1), Constraint::Percentage(40)]).areas(area);
			(picker, Some(log))
		} else {
			(area, None)
		};

		let view = self.view();
		let theme = self.style.theme;
		let focus = if view.open { None } else { self.tag_focus };
		let tags = if view.show_tags {
			tag_lines(&view.tags, focus, picker_area.width, &theme)
		} else {
			Vec::new()
		};
		let tags_height = u16::try_from(tags.len()).unwrap_or(u16::MAX);

		if view.open {
			let button_height = u16::from(view.show_submit_button);
			let [prompt_area, list_area, button_area, tags_area] = Layout::vertical([
				Constraint::Length(1),
				Constraint::Fill(1),
				Constraint::Length(button_height),
				Constraint::Length(tags_height),
			])
			.areas(picker_area);

			render_prompt(
				frame,
				PromptContext {
					search_input: &self.search_input,
					placeholder: &view.placeholder,
					back_arrow: view.show_back_arrow,
					submit_chevron: !self.config.single && self.config.hide_submit_button,
					area: prompt_area,
					theme: &theme,
				},
			);
			render_list(
				frame,
				list_area,
				ListContext {
					rows: &view.rows,
					add_item: view.add_item.as_deref(),
					empty_message: view.empty_message.as_deref(),
					cursor: self.cursor,
					theme: &theme,
				},
				&mut self.list_state,
			);
			if view.show_submit_button {
				render_submit_button(frame, button_area, &view.submit_text, &theme);
			}
			render_tags(frame, tags_area, tags);
		} else {
			let [header_area, tags_area, _] = Layout::vertical([
				Constraint::Length(1),
				Constraint::Length(tags_height),
				Constraint::Fill(1),
			])
			.areas(picker_area);

			render_header(frame, header_area, &view.label, &theme);
			render_tags(frame, tags_area, tags);
		}

		if let Some(log_area) = log_area {
			self.log_pane.render(frame, log_area, &theme);
		}
	}
}
