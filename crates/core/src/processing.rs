//! Text transform performed by the processor, and the text format of the
//! result file it leaves behind.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_SUCCESS: &str = "success";
pub const MESSAGE_SUCCESS: &str = "Data processed successfully";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedData {
    pub original: String,
    /// Upper-cased input.
    pub processed: String,
    /// Length in characters, not bytes.
    pub length: usize,
    /// Count of whitespace-separated words.
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingRecord {
    pub timestamp: DateTime<Utc>,
    pub status: String,
    pub message: String,
    pub data: ProcessedData,
}

pub fn process_data(input: &str, timestamp: DateTime<Utc>) -> ProcessingRecord {
    ProcessingRecord {
        timestamp,
        status: STATUS_SUCCESS.to_string(),
        message: MESSAGE_SUCCESS.to_string(),
        data: ProcessedData {
            original: input.to_string(),
            processed: input.to_uppercase(),
            length: input.chars().count(),
            word_count: input.split_whitespace().count(),
        },
    }
}

/// Render `record` as the human-readable result file body. The data block
/// is pretty-printed JSON.
pub fn render(record: &ProcessingRecord) -> String {
    let mut out = String::new();
    out.push_str("Processing Result\n");
    out.push_str("=================\n\n");
    let _ = writeln!(out, "Timestamp: {}", record.timestamp.to_rfc3339());
    let _ = writeln!(out, "Status: {}", record.status);
    let _ = writeln!(out, "Message: {}\n", record.message);
    out.push_str("Processed Data:\n");
    let _ = writeln!(
        out,
        "{}",
        serde_json::to_string_pretty(&record.data).unwrap_or_default()
    );
    out
}
