use crate::model::{RankEntry, Report};

use std::fmt::Write;

const RULE: &str = "-------------------";

/// Render the report as plain text, one `key => value` line per entry.
pub fn render_text_report(report: &Report) -> anyhow::Result<String> {
    let mut out = String::new();

    section(
        &mut out,
        &format!("Top {} URL by size:", report.top),
        &report.urls,
    )?;
    section(
        &mut out,
        &format!("Top {} Referer by count:", report.top),
        &report.referrers,
    )?;

    writeln!(out, "{}", RULE)?;
    writeln!(out, "Total: {} bytes", report.total_bytes)?;
    writeln!(out, "{}", RULE)?;
    Ok(out)
}

fn section(out: &mut String, title: &str, entries: &[RankEntry]) -> std::fmt::Result {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", RULE)?;
    for e in entries {
        writeln!(out, "{} => {}", e.key, e.value)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WorkerStats;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_both_rankings_and_total() {
        let report = Report {
            top: 2,
            workers: 1,
            urls: vec![RankEntry::new("/big", 900), RankEntry::new("/small", 10)],
            referrers: vec![RankEntry::new("-", 3)],
            total_bytes: 910,
            stats: WorkerStats::default(),
        };

        let expected = "\
-------------------
Top 2 URL by size:
-------------------
/big => 900
/small => 10

-------------------
Top 2 Referer by count:
-------------------
- => 3

-------------------
Total: 910 bytes
-------------------
";
        assert_eq!(render_text_report(&report).unwrap(), expected);
    }

    #[test]
    fn json_contains_rankings() {
        let report = Report {
            top: 1,
            workers: 2,
            urls: vec![RankEntry::new("/a", 5)],
            referrers: vec![],
            total_bytes: 5,
            stats: WorkerStats::default(),
        };

        let value: serde_json::Value =
            serde_json::from_str(&crate::render::render_json_report(&report).unwrap()).unwrap();
        assert_eq!(value["urls"][0]["key"], "/a");
        assert_eq!(value["urls"][0]["value"], 5);
        assert_eq!(value["total_bytes"], 5);
        assert_eq!(value["workers"], 2);
    }
}
