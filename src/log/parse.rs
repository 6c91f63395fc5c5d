use crate::log::LogFields;

use regex::Regex;
use tracing::trace;

/// Combined log format:
/// ip ident user [time] "request" status size "referer" "agent"
///
/// Example:
/// 127.0.0.1 - frank [10/Oct/2000:13:55:36 -0700] "GET /a.gif HTTP/1.0" 200 2326 "http://x/" "Mozilla/4.08"
const COMBINED_LINE_RE: &str = concat!(
    r#"^(?P<ip>\S+) (?P<ident>\S+) (?P<user>\S+) \[(?P<time>[^\]]+)\] "#,
    r#""(?P<request>[^"]*)" (?P<status>\d+) (?P<size>\d+) "(?P<referer>[^"]*)" "(?P<agent>[^"]*)""#,
);

/// Extracts request, size and referrer from combined-format lines.
///
/// Build one per worker and reuse it for every line; matching itself is
/// read-only.
#[derive(Debug, Clone)]
pub struct LineParser {
    re: Regex,
}

impl LineParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            re: Regex::new(COMBINED_LINE_RE)?,
        })
    }

    /// Returns `None` when the line does not have the combined shape.
    pub fn parse<'a>(&self, line: &'a str) -> Option<LogFields<'a>> {
        let Some(caps) = self.re.captures(line) else {
            trace!(line, "no match");
            return None;
        };

        Some(LogFields {
            request: caps.name("request").map(|m| m.as_str()),
            size: caps.name("size").map(|m| m.as_str()),
            referrer: caps.name("referer").map(|m| m.as_str()),
        })
    }
}
