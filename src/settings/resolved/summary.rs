use mselect::style::DEFAULT_THEME_NAME;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	match (&config.items_file, config.labels.is_empty()) {
		(Some(file), _) => println!("  Items: {}", file.display()),
		(None, false) => println!("  Items: {}", config.labels.join(", ")),
		(None, true) => println!("  Items: (none)"),
	}
	println!("  Unique key: {}", config.schema.unique_key);
	println!("  Display key: {}", config.schema.display_key);
	if !config.selected.is_empty() {
		println!("  Selected: {}", config.selected.join(", "));
	}

	let select = &config.select;
	println!("  Single: {}", bool_to_word(select.single));
	println!("  Filter method: {}", select.filter_method);
	println!("  Remove selected: {}", bool_to_word(select.remove_selected));
	println!("  Can add items: {}", bool_to_word(select.can_add_items));
	println!("  Hide tags: {}", bool_to_word(select.hide_tags));
	println!(
		"  Hide submit button: {}",
		bool_to_word(select.hide_submit_button)
	);
	println!("  Hide dropdown: {}", bool_to_word(select.hide_dropdown));

	let texts = &select.texts;
	println!("  Select text: {}", texts.select_text);
	println!("  Selected text: {}", texts.selected_text);
	println!("  No items text: {}", texts.no_items_text);
	println!("  Placeholder: {}", texts.placeholder);
	println!("  Submit text: {}", texts.submit_text);

	println!(
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or(DEFAULT_THEME_NAME)
	);
	println!("  Open on start: {}", bool_to_word(config.open));
	if !config.initial_query.is_empty() {
		println!("  Initial query: {}", config.initial_query);
	}
	println!("  Log level: {}", config.log_level);
	if let Some(file) = &config.log_file {
		println!("  Log file: {}", file.display());
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(super::bool_to_word(true), "yes");
		assert_eq!(super::bool_to_word(false), "no");
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			labels: vec!["Apple".into(), "Banana".into()],
			selected: vec!["Apple".into()],
			initial_query: "ap".into(),
			theme: Some("light".into()),
			log_file: Some(PathBuf::from("/tmp/mselect.log")),
			..ResolvedConfig::default()
		};

		print_summary(&config);
	}
}
