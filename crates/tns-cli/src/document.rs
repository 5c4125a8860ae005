//! Rendering of the dataset page.
//!
//! The page is a markdown file whose front matter carries the tensor's
//! statistics, free-text description and citation blocks, hosted-file
//! links and tags, in a fixed key order consumed by the FROSTT site
//! generator. Dimension entries are truncated to `order` and numbers
//! are formatted for display (thousands separators, scientific-notation
//! density).

use std::fmt::Write as _;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use frostt::TensorStats;

use crate::output::{format_count, format_density};

const PROG_NAME: &str = "tns";
const PROG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One hosted copy of the tensor file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HostedFile {
    pub url: String,
    pub caption: String,
}

/// Everything the dataset page needs.
#[derive(Debug, Clone)]
pub(crate) struct TensorDocument {
    pub title: String,
    /// Free text, already indented for the front-matter block.
    pub description: String,
    /// Bibtex entry, already indented for the front-matter block.
    pub citation: String,
    pub stats: TensorStats,
    pub files: Vec<HostedFile>,
    pub tags: Vec<String>,
}

impl TensorDocument {
    /// Render the page in its fixed key order.
    pub(crate) fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "---");
        let _ = writeln!(out, "title: {}\n", self.title);
        let _ = writeln!(out, "description: >\n  {}\n", self.description);

        let _ = writeln!(out, "order: '{}'", self.stats.order);
        let _ = writeln!(out, "nnz: '{}'", format_count(self.stats.nonzeros));

        let shown = self.stats.dims.len().min(self.stats.order);
        let dims: Vec<String> = self.stats.dims[..shown]
            .iter()
            .map(|&d| format!("'{}'", format_count(d)))
            .collect();
        let _ = writeln!(out, "dims: [{}]", dims.join(", "));
        let _ = writeln!(out, "density: '{}'", format_density(self.stats.density));

        let _ = writeln!(out, "files:");
        for file in &self.files {
            let _ = writeln!(out, " - [\"{}\", {}]", file.url, file.caption);
        }
        let _ = writeln!(out, "\n");

        let _ = writeln!(out, "citation: >\n  {}\n", self.citation);
        let _ = writeln!(out, "tags: [{}]", self.tags.join(", "));

        let _ = writeln!(
            out,
            "\n# generated on ({}) by {} v{}",
            timestamp(),
            PROG_NAME,
            PROG_VERSION
        );
        let _ = writeln!(out, "---");

        out
    }
}

/// Re-indent free text so continuation lines stay inside a front-matter
/// block: every newline gets two spaces appended.
pub(crate) fn indent_block(text: &str) -> String {
    text.replace('\n', "\n  ")
}

/// Current wall-clock time as `YYYY-MM-DD HH:MM:SS` (UTC).
fn timestamp() -> String {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO);
    let secs = elapsed.as_secs();
    let (year, month, day) = civil_from_days((secs / 86_400) as i64);
    format!(
        "{year:04}-{month:02}-{day:02} {:02}:{:02}:{:02}",
        (secs / 3600) % 24,
        (secs / 60) % 60,
        secs % 60
    )
}

/// Gregorian date from days since 1970-01-01 (Hinnant's algorithm).
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> TensorDocument {
        TensorDocument {
            title: "chicago-crime".to_string(),
            description: indent_block("Crime reports.\nOne entry per report."),
            citation: indent_block("@misc{chicago}"),
            stats: TensorStats {
                order: 2,
                nonzeros: 3,
                dims: vec![3, 3],
                density: 3.0 / 9.0,
            },
            files: vec![HostedFile {
                url: "http://example.com/chicago.tns.gz".to_string(),
                caption: "Primary copy".to_string(),
            }],
            tags: vec!["crime".to_string(), "counts".to_string()],
        }
    }

    #[test]
    fn renders_fixed_key_order() {
        let page = sample_doc().render();
        let positions: Vec<usize> = [
            "---",
            "title: chicago-crime",
            "description: >",
            "order: '2'",
            "nnz: '3'",
            "dims: ['3', '3']",
            "density: '3.333e-01'",
            "files:",
            "citation: >",
            "tags: [crime, counts]",
            "# generated on (",
        ]
        .iter()
        .map(|key| page.find(key).unwrap_or_else(|| panic!("missing {key}")))
        .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "keys out of order");
        assert!(page.ends_with("---\n"));
    }

    #[test]
    fn hosted_files_quote_only_the_url() {
        let page = sample_doc().render();
        assert!(page.contains(" - [\"http://example.com/chicago.tns.gz\", Primary copy]"));
    }

    #[test]
    fn description_lines_are_indented() {
        let page = sample_doc().render();
        assert!(page.contains("  Crime reports.\n  One entry per report."));
    }

    #[test]
    fn dims_are_truncated_to_order() {
        let mut doc = sample_doc();
        doc.stats.dims = vec![3, 3, 7];
        let page = doc.render();
        assert!(page.contains("dims: ['3', '3']"));
        assert!(!page.contains("'7'"));
    }

    #[test]
    fn large_counts_are_grouped() {
        let mut doc = sample_doc();
        doc.stats.nonzeros = 5_330_673;
        doc.stats.dims = vec![6186, 24];
        doc.stats.density = 5_330_673.0 / (6186.0 * 24.0);
        let page = doc.render();
        assert!(page.contains("nnz: '5,330,673'"));
        assert!(page.contains("dims: ['6,186', '24']"));
    }

    #[test]
    fn civil_dates_are_correct() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(19_723), (2024, 1, 1));
        assert_eq!(civil_from_days(20_694), (2026, 8, 29));
    }
}
