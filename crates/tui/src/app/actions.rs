use log::debug;
use mselect_core::ItemSchema;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::outcome::PickOutcome;

impl<S> App<'_, S>
where
	S: ItemSchema,
	S::Item: Clone,
{
	/// Process a keyboard event and return an outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<PickOutcome<S::Id, S::Item>> {
		let control = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('s') if control => return Some(self.outcome(true)),
			KeyCode::Char('c') if control => return Some(self.outcome(false)),
			KeyCode::F(2) => {
				self.log_pane.toggle();
				return None;
			}
			_ => {}
		}
		if self.log_pane.handle_key(key) {
			return None;
		}

		if self.selector.is_open() {
			self.handle_open_key(key);
			None
		} else {
			self.handle_closed_key(key)
		}
	}

	fn handle_closed_key(&mut self, key: KeyEvent) -> Option<PickOutcome<S::Id, S::Item>> {
		match key.code {
			KeyCode::Esc => return Some(self.outcome(false)),
			KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
				self.tag_focus = None;
				self.cursor = 0;
				self.interact(|widget, state, changes| widget.toggle_selector(state, changes));
			}
			KeyCode::Left if self.tags_visible() => self.focus_previous_tag(),
			KeyCode::Right if self.tags_visible() => self.focus_next_tag(),
			KeyCode::Delete | KeyCode::Backspace if self.tags_visible() => {
				self.remove_focused_tag();
			}
			_ => {}
		}
		None
	}

	fn handle_open_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc if !self.config.hide_dropdown => {
				self.interact(|widget, state, changes| widget.clear_selector(state, changes));
			}
			KeyCode::Tab => {
				self.interact(|widget, state, _| widget.submit(state));
			}
			KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
			KeyCode::Down => {
				if self.cursor + 1 < self.entry_count() {
					self.cursor += 1;
				}
			}
			KeyCode::Enter => self.activate_cursor(),
			_ => {
				if self.search_input.input(key) {
					let text = self.search_input.text().to_string();
					self.cursor = 0;
					self.interact(|widget, state, changes| widget.change_input(state, text, changes));
				}
			}
		}
	}

	/// Toggle the row under the cursor, or create the item when the cursor
	/// sits on the add-item row.
	fn activate_cursor(&mut self) {
		let view = self.view();
		if let Some(row) = view.rows.get(self.cursor) {
			let index = row.index;
			self.interact(|widget, state, changes| {
				widget
					.items()
					.get(index)
					.is_some_and(|item| widget.toggle_item(state, item, changes))
			});
		} else if view.add_item.is_some() {
			let added = self.interact(|widget, state, changes| widget.add_item(state, changes));
			match added {
				Some(id) => self.added.push(id),
				None => debug!("search text could not be turned into an item"),
			}
		}
	}

	/// Tags can only be focused or removed while they are on screen.
	fn tags_visible(&self) -> bool {
		self.view().show_tags
	}

	fn focus_previous_tag(&mut self) {
		let count = self.widget().tags().len();
		if count == 0 {
			return;
		}
		self.tag_focus = Some(match self.tag_focus {
			Some(focus) => focus.saturating_sub(1),
			None => count - 1,
		});
	}

	fn focus_next_tag(&mut self) {
		let count = self.widget().tags().len();
		if count == 0 {
			return;
		}
		self.tag_focus = Some(match self.tag_focus {
			Some(focus) => (focus + 1).min(count - 1),
			None => 0,
		});
	}

	fn remove_focused_tag(&mut self) {
		let Some(focus) = self.tag_focus else {
			return;
		};
		let Some(tag) = self.widget().tags().into_iter().nth(focus) else {
			return;
		};
		self.interact(|widget, _, changes| widget.remove_tag(&tag.id, changes));
	}
}

#[cfg(test)]
mod tests {
	use mselect_core::{FieldKeys, SelectConfig};
	use ratatui::crossterm::event::{KeyEventKind, KeyEventState};
	use serde_json::{Value, json};

	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent {
			code,
			modifiers: KeyModifiers::NONE,
			kind: KeyEventKind::Press,
			state: KeyEventState::NONE,
		}
	}

	fn ctrl(ch: char) -> KeyEvent {
		KeyEvent {
			modifiers: KeyModifiers::CONTROL,
			..key(KeyCode::Char(ch))
		}
	}

	fn items() -> Vec<Value> {
		vec![
			json!({ "_id": 1, "name": "Apple" }),
			json!({ "_id": 2, "name": "Banana" }),
			json!({ "_id": 3, "name": "Cherry", "disabled": true }),
		]
	}

	fn app(config: SelectConfig) -> App<'static, FieldKeys> {
		App::new(FieldKeys::default(), items(), Vec::new(), config)
	}

	fn type_text(app: &mut App<'_, FieldKeys>, text: &str) {
		for ch in text.chars() {
			assert!(app.handle_key(key(KeyCode::Char(ch))).is_none());
		}
	}

	#[test]
	fn typing_filters_and_enter_toggles() {
		let mut app = app(SelectConfig::default());
		app.handle_key(key(KeyCode::Enter));
		assert!(app.is_open());

		type_text(&mut app, "ban");
		assert_eq!(app.widget().view(&app.selector).rows.len(), 1);

		app.handle_key(key(KeyCode::Enter));
		assert_eq!(app.selected(), &[json!(2)]);
		assert!(app.is_open());
	}

	#[test]
	fn cursor_moves_and_disabled_rows_stay_unselected() {
		let mut app = app(SelectConfig::default());
		app.open_with_query("");

		app.handle_key(key(KeyCode::Down));
		app.handle_key(key(KeyCode::Down));
		app.handle_key(key(KeyCode::Down));
		assert_eq!(app.cursor, 2);

		app.handle_key(key(KeyCode::Enter));
		assert!(app.selected().is_empty());

		app.handle_key(key(KeyCode::Up));
		app.handle_key(key(KeyCode::Enter));
		assert_eq!(app.selected(), &[json!(2)]);
	}

	#[test]
	fn add_row_creates_and_selects_item() {
		let mut app = app(SelectConfig {
			can_add_items: true,
			..SelectConfig::default()
		});
		app.open_with_query("");
		type_text(&mut app, "Kiwi gold");

		assert_eq!(app.entry_count(), 1);
		app.handle_key(key(KeyCode::Enter));

		assert_eq!(app.items().len(), 4);
		assert_eq!(app.selected(), &[json!("Kiwi-gold")]);
		assert_eq!(app.search_input.text(), "");

		let outcome = app.handle_key(ctrl('s')).expect("accepted");
		assert!(outcome.accepted);
		assert_eq!(outcome.added, vec![json!("Kiwi-gold")]);
	}

	#[test]
	fn escape_closes_the_list_then_cancels() {
		let mut app = app(SelectConfig::default());
		app.open_with_query("app");

		assert!(app.handle_key(key(KeyCode::Esc)).is_none());
		assert!(!app.is_open());
		assert_eq!(app.search_input.text(), "");

		let outcome = app.handle_key(key(KeyCode::Esc)).expect("cancelled");
		assert!(outcome.is_cancelled());
	}

	#[test]
	fn escape_is_ignored_without_back_arrow() {
		let mut app = app(SelectConfig {
			hide_dropdown: true,
			..SelectConfig::default()
		});
		app.open_with_query("");

		app.handle_key(key(KeyCode::Esc));
		assert!(app.is_open());

		app.handle_key(key(KeyCode::Tab));
		assert!(!app.is_open());
	}

	#[test]
	fn single_mode_closes_after_pick() {
		let mut app = app(SelectConfig {
			single: true,
			..SelectConfig::default()
		});
		app.open_with_query("");

		app.handle_key(key(KeyCode::Enter));
		assert_eq!(app.selected(), &[json!(1)]);
		assert!(!app.is_open());
		assert_eq!(app.view().label, "Apple");
	}

	#[test]
	fn focused_tag_is_removed() {
		let mut app = App::new(
			FieldKeys::default(),
			items(),
			vec![json!(1), json!(2)],
			SelectConfig::default(),
		);

		app.handle_key(key(KeyCode::Right));
		app.handle_key(key(KeyCode::Right));
		assert_eq!(app.tag_focus, Some(1));

		app.handle_key(key(KeyCode::Backspace));
		assert_eq!(app.selected(), &[json!(1)]);
		assert_eq!(app.tag_focus, Some(0));
		assert_eq!(app.items().len(), 3);
	}

	#[test]
	fn hidden_tags_cannot_be_focused_or_removed() {
		let mut single = App::new(
			FieldKeys::default(),
			items(),
			vec![json!(1)],
			SelectConfig {
				single: true,
				..SelectConfig::default()
			},
		);
		single.handle_key(key(KeyCode::Right));
		single.handle_key(key(KeyCode::Backspace));
		assert_eq!(single.tag_focus, None);
		assert_eq!(single.selected(), &[json!(1)]);

		let mut hidden = App::new(
			FieldKeys::default(),
			items(),
			vec![json!(1), json!(2)],
			SelectConfig {
				hide_tags: true,
				..SelectConfig::default()
			},
		);
		hidden.handle_key(key(KeyCode::Left));
		hidden.handle_key(key(KeyCode::Delete));
		assert_eq!(hidden.tag_focus, None);
		assert_eq!(hidden.selected(), &[json!(1), json!(2)]);
		assert!(!hidden.is_open());
	}
}
