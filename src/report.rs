use serde::Serialize;

use crate::parser::DropTally;

/// Everything one run learned, decoupled from how it gets shown. The
/// console renders it as markdown-ish text; `--json` serializes it as-is.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub pages_scanned: usize,
    pub pages_unreadable: usize,
    pub lines_extracted: usize,
    pub records_parsed: usize,
    pub lines_dropped: usize,
    pub drops: DropTally,
    pub records_written: usize,
    pub search: Option<SearchOutcome>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub query: String,
    pub matched_line: Option<String>,
}

impl RunSummary {
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("## Run Summary\n");
        out.push_str(&format!(
            "- Pages scanned: {} ({} unreadable)\n",
            self.pages_scanned, self.pages_unreadable
        ));
        out.push_str(&format!("- Candidate lines: {}\n", self.lines_extracted));
        out.push_str(&format!(
            "- Records parsed: {} ({} lines dropped)\n",
            self.records_parsed, self.lines_dropped
        ));
        for (label, count) in self.drops.breakdown() {
            out.push_str(&format!("    - {label}: {count}\n"));
        }
        out.push_str(&format!("- Records written: {}\n", self.records_written));
        if let Some(search) = &self.search {
            match &search.matched_line {
                Some(line) => out.push_str(&format!("- Search '{}': {line}\n", search.query)),
                None => out.push_str(&format!("- Search '{}': not found\n", search.query)),
            }
        }
        out
    }
}
