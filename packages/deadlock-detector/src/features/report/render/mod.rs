//! Output rendering for reports

pub mod json;
pub mod text;

pub use json::{render_json, render_json_compact, render_json_string};
pub use text::{render_batch_summary, render_text};
