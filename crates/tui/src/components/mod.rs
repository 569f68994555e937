//! UI building blocks drawn by the picker.

pub mod button;
/// Collapsed select bar.
pub mod header;
pub mod list;
/// Search row of the open list.
pub mod prompt;
pub mod scrollbar;
pub mod tags;

pub use button::render_submit_button;
pub use header::render_header;
pub use list::{ListContext, render_list};
pub use prompt::{PromptContext, render_prompt};
pub use scrollbar::{ScrollMetrics, render_scrollbar};
pub use tags::{render_tags, tag_lines};
