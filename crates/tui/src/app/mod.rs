//! Core application state and behavior for the interactive picker.
//!
//! The [`App`] type owns the items and the selection and drives a
//! [`MultiSelect`](mselect_core::MultiSelect) over them. Supporting modules
//! partition the implementation: input handling, rendering and the handler
//! that carries widget changes back into the app.

mod actions;
mod host;
mod render;
mod state;

pub use state::App;
