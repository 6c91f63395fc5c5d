//! Report output.

pub mod text;

pub use text::render_text_report;

use crate::model::Report;

pub fn render_json_report(report: &Report) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
