use anyhow::Result;
use mselect::PickOutcome;
use serde_json::{Value, json};

/// Render an identifier for plain output. Strings are printed without quotes.
fn plain_id(id: &Value) -> String {
	match id {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

/// Print a plain-text representation of the pick outcome.
pub(crate) fn print_plain(outcome: &PickOutcome<Value, Value>) {
	if !outcome.accepted {
		println!("Selection cancelled (query: '{}')", outcome.query);
		return;
	}

	for id in &outcome.selected {
		println!("{}", plain_id(id));
	}
}

/// Format the pick outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickOutcome<Value, Value>) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"selected": outcome.selected,
		"added": outcome.added,
		"query": outcome.query,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the pick outcome.
pub(crate) fn print_json(outcome: &PickOutcome<Value, Value>) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
