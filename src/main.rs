mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use log::info;
use settings::ResolvedConfig;
use workflow::PickWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in mselect::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	mselect::logging::initialize(resolved.log_level, resolved.log_file.as_deref())?;
	info!("mselect {} starting", env!("CARGO_PKG_VERSION"));

	run_picker(cli.output, resolved)
}

/// Execute the picker workflow and print output in the chosen format.
fn run_picker(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = PickWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
