//! Searchable dropdown multi-select for the terminal.
//!
//! The root module re-exports the headless widget from `mselect-core` and the
//! ratatui host from `mselect-tui` so embedders can depend on a single crate.

pub mod app_dirs;
pub mod logging;

pub use mselect_core::{
	FieldKeys, FilterMethod, FnHandler, ItemError, ItemSchema, MultiSelect, Record, Records,
	SelectConfig, SelectHandler, SelectTexts, SelectView, SelectorState, filter,
};
pub use mselect_tui::{App, PickOutcome, Picker, Theme, default_theme, style};
