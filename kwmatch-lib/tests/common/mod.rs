//! Shared helpers for the command integration tests.

#![allow(dead_code, reason = "Each test binary uses a different subset of the helpers")]

use camino::Utf8PathBuf;
use kwmatch_lib::Host;
use std::io::Write;

/// Test host that captures output to in-memory buffers.
pub struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
}

impl TestHost {
    pub const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
        }
    }

    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    pub fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }

    fn exit(&mut self, _code: i32) {}
}

/// A temporary directory that hands out UTF-8 paths.
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.dir.path().join(name)).expect("temp paths are UTF-8")
    }

    pub fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

/// Runs the CLI with the given arguments after the program name.
pub fn run(host: &mut TestHost, args: &[&str]) -> kwmatch_lib::Result<()> {
    kwmatch_lib::run(host, ["kwmatch"].iter().chain(args).copied())
}

/// Reads a JSON report and returns its views by name.
pub fn read_views(path: &Utf8PathBuf) -> serde_json::Map<String, serde_json::Value> {
    let text = std::fs::read_to_string(path).expect("Failed to read JSON report");
    let report: serde_json::Value = serde_json::from_str(&text).expect("JSON report should parse");
    report["views"]
        .as_array()
        .expect("views should be an array")
        .iter()
        .map(|view| (view["name"].as_str().expect("view name").to_string(), view.clone()))
        .collect()
}

/// Builds one keyword-view API row.
pub fn keyword_row(campaign: &str, keyword: &str, match_type: &str, clicks: u64, impressions: u64, average_cost: u64) -> String {
    format!(
        r#"{{"customer":{{"id":"123"}},"campaign":{{"name":"{campaign}","biddingStrategyType":"TARGET_CPA"}},"adGroupCriterion":{{"keyword":{{"text":"{keyword}","matchType":"{match_type}"}}}},"metrics":{{"clicks":"{clicks}","impressions":"{impressions}","conversions":1,"conversionsValue":2.5,"averageCost":"{average_cost}"}}}}"#
    )
}

/// Builds one search-term-view API row.
pub fn search_term_row(keyword: &str, match_type: &str, search_term: &str, clicks: u64) -> String {
    format!(
        r#"{{"customer":{{"id":"123"}},"campaign":{{"name":"C1"}},"segments":{{"keyword":{{"info":{{"text":"{keyword}","matchType":"{match_type}"}}}}}},"searchTermView":{{"searchTerm":"{search_term}"}},"metrics":{{"clicks":"{clicks}","impressions":"50","averageCost":"1000000"}}}}"#
    )
}

pub fn lines(rows: &[String]) -> String {
    let mut text = rows.join("\n");
    text.push('\n');
    text
}
