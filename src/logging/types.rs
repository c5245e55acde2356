use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

pub const UNKNOWN_CLIENT: &str = "Unknown";

/// Snapshot of one inbound call, taken before any routing decision.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub received_at: DateTime<Local>,
    pub method: String,
    pub path: String,
    pub full_url: String,
    /// `ip:port`, or [`UNKNOWN_CLIENT`].
    pub client: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub query: String,
}

/// Identifies the record written for one request; appends go to the same file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogHandle {
    pub id: String,
    pub path: PathBuf,
}

impl LogHandle {
    pub fn path(&self) -> &Path {
        &self.path
    }
}
