//! Output rendering.

mod json;
mod report;

pub use json::{to_json, JsonFormat};
pub use report::render_report;
