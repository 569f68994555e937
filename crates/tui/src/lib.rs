//! Interactive terminal host for the mselect widget.
//!
//! [`App`] owns the items and the selection and renders a
//! [`MultiSelect`](mselect_core::MultiSelect) with ratatui. [`Picker`] is the
//! builder most callers want.

mod app;
mod builder;
pub mod components;
pub mod input;
pub mod log_pane;
mod outcome;
mod runtime;
pub mod style;


pub use app::App;
pub use builder::Picker;
pub use input::SearchInput;
pub use log_pane::LogPane;
pub use outcome::PickOutcome;
pub use style::{StyleConfig, Theme, default_theme};
