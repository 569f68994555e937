use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{FilterMethodArg, LogLevelArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `mselect` binary.
#[derive(Parser, Debug)]
#[command(
	name = "mselect",
	version,
	long_version = long_version(),
	about = "Pick one or more items from a searchable dropdown in the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "MSELECT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'i',
		long = "items",
		value_name = "FILE",
		help = "Read items from a JSON array of objects (default: none)"
	)]
	pub(crate) items: Option<PathBuf>,
	#[arg(
		long = "item",
		value_name = "LABEL",
		action = ArgAction::Append,
		help = "Add an item by label, may be repeated (default: none)"
	)]
	pub(crate) labels: Vec<String>,
	#[arg(
		long = "unique-key",
		value_name = "FIELD",
		help = "Item field holding the identifier (default: _id)"
	)]
	pub(crate) unique_key: Option<String>,
	#[arg(
		long = "display-key",
		value_name = "FIELD",
		help = "Item field holding the label (default: name)"
	)]
	pub(crate) display_key: Option<String>,
	#[arg(
		short = 's',
		long = "selected",
		value_name = "ID",
		value_delimiter = ',',
		action = ArgAction::Append,
		help = "Identifiers selected on start, comma-separated or repeated (default: none)"
	)]
	pub(crate) selected: Vec<String>,
	#[arg(
		long,
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		default_missing_value = "true",
		help = "Pick a single item and close the list (default: disabled)"
	)]
	pub(crate) single: Option<bool>,
	#[arg(
		long = "filter-method",
		value_enum,
		help = "Match the search as one phrase or as separate words (default: tokens)"
	)]
	pub(crate) filter_method: Option<FilterMethodArg>,
	#[arg(
		long = "remove-selected",
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		default_missing_value = "true",
		help = "Hide selected items from the list (default: disabled)"
	)]
	pub(crate) remove_selected: Option<bool>,
	#[arg(
		long = "can-add-items",
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		default_missing_value = "true",
		help = "Offer to create items from unmatched search text (default: disabled)"
	)]
	pub(crate) can_add_items: Option<bool>,
	#[arg(
		long = "hide-tags",
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		default_missing_value = "true",
		help = "Hide the tags of selected items (default: disabled)"
	)]
	pub(crate) hide_tags: Option<bool>,
	#[arg(
		long = "hide-submit-button",
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		default_missing_value = "true",
		help = "Hide the submit button (default: disabled)"
	)]
	pub(crate) hide_submit_button: Option<bool>,
	#[arg(
		long = "hide-dropdown",
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		default_missing_value = "true",
		help = "Hide the back arrow that closes the list (default: disabled)"
	)]
	pub(crate) hide_dropdown: Option<bool>,
	#[arg(
		long = "select-text",
		value_name = "TEXT",
		help = "Header label while nothing is selected (default: Select)"
	)]
	pub(crate) select_text: Option<String>,
	#[arg(
		long = "selected-text",
		value_name = "TEXT",
		help = "Suffix of the selection count (default: selected)"
	)]
	pub(crate) selected_text: Option<String>,
	#[arg(
		long = "no-items-text",
		value_name = "TEXT",
		help = "Message shown when no item matches (default: No items to display.)"
	)]
	pub(crate) no_items_text: Option<String>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Search box placeholder (default: Search)"
	)]
	pub(crate) placeholder: Option<String>,
	#[arg(
		long = "submit-text",
		value_name = "TEXT",
		help = "Submit button label (default: Submit)"
	)]
	pub(crate) submit_text: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		default_missing_value = "true",
		help = "Start with the list open (default: disabled)"
	)]
	pub(crate) open: Option<bool>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Verbosity of the log pane (default: info)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Mirror log records to a file (default: none)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
