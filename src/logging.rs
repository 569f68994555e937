//! Route `log` records into the in-UI console provided by `tui-logger`.
//!
//! tui-logger's own thread moves buffered records into the history the log
//! pane reads from. Records can be mirrored to a file.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result, anyhow};
use log::LevelFilter;
use tui_logger::{TuiLoggerFile, TuiLoggerLevelOutput};

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Install the logger once. Later calls only adjust the level.
pub fn initialize(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
	if INSTALLED.get().is_none() {
		tui_logger::init_logger(level)
			.map_err(|err| anyhow!("failed to install the logger: {err:?}"))?;
		let _ = INSTALLED.set(());
	}
	tui_logger::set_default_level(level);
	log::set_max_level(level);

	if let Some(path) = log_file {
		attach_file(path)?;
	}
	Ok(())
}

fn attach_file(path: &Path) -> Result<()> {
	if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let file = TuiLoggerFile::new(&path.to_string_lossy())
		.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
		.output_file(false)
		.output_separator(':');
	tui_logger::set_log_file(file);
	Ok(())
}
