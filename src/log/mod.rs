//! Field extraction for combined-format access logs.

pub mod parse;
pub mod row;

pub use parse::LineParser;
pub use row::LogFields;
