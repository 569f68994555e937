//! Headless logic for a controlled dropdown multi-select.
//!
//! The widget owns exactly two pieces of state, whether the list is open and
//! the current search text, both held by [`SelectorState`]. Items and the
//! selected identifiers always belong to the caller: they are borrowed as
//! props by [`MultiSelect`] and only ever changed through a
//! [`SelectHandler`]. Everything shown on screen is re-derived from those
//! props on each call to [`MultiSelect::view`].
//!
//! ```
//! use mselect_core::{FieldKeys, FnHandler, MultiSelect, SelectConfig, SelectorState};
//! use serde_json::json;
//!
//! let schema = FieldKeys::default();
//! let items = vec![
//! 	json!({ "_id": 1, "name": "Apple" }),
//! 	json!({ "_id": 2, "name": "Banana" }),
//! ];
//! let mut selected = vec![json!(1)];
//! let config = SelectConfig::default();
//! let mut state = SelectorState::default();
//!
//! let widget = MultiSelect::new(&schema, &items, &selected, &config);
//! let mut next = None;
//! widget.toggle_item(&mut state, &items[1], &mut FnHandler(|ids: Vec<serde_json::Value>| next = Some(ids)));
//! selected = next.unwrap();
//!
//! assert_eq!(selected, vec![json!(1), json!(2)]);
//! ```

pub mod config;
pub mod display;
mod error;
pub mod filter;
mod handler;
pub mod schema;
pub mod selection;
mod state;
mod widget;

pub use config::{SelectConfig, SelectTexts};
pub use display::{SelectionSummary, TagView};
pub use error::{ItemError, ParseFilterMethodError};
pub use filter::{FilterMethod, FilterQuery, Matcher};
pub use handler::{FnHandler, SelectHandler};
pub use schema::{FieldKeys, ItemSchema, Record, Records};
pub use selection::SelectionMode;
pub use state::SelectorState;
pub use widget::{MultiSelect, RowView, SelectView};
