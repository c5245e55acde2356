use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::error::Result;
use crate::logging::time::{file_stamp, to_local_string};
use crate::logging::types::{InboundRequest, LogHandle};
use crate::openai::ChatCompletionResponse;

/// One plain-text record per request under `dir`.
///
/// Names keep the second-resolution stamp as a prefix so the directory sorts
/// chronologically; the sequence number and uuid fragment make every name
/// unique even for requests arriving within the same second.
#[derive(Debug)]
pub struct FileLogStore {
    dir: PathBuf,
    seq: AtomicU64,
}

impl FileLogStore {
    /// Opens the store, creating `dir` if it does not exist yet.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(Self {
            dir,
            seq: AtomicU64::new(0),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn next_handle(&self, snapshot: &InboundRequest) -> LogHandle {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        let nonce = Uuid::new_v4().simple().to_string();
        let id = format!(
            "{}_{:06}_{}",
            file_stamp(&snapshot.received_at),
            seq,
            &nonce[..8]
        );
        let path = self.dir.join(format!("{id}.txt"));
        LogHandle { id, path }
    }

    pub async fn write_initial(&self, snapshot: &InboundRequest) -> Result<LogHandle> {
        let handle = self.next_handle(snapshot);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(handle.path())
            .await?;
        file.write_all(render_request(snapshot).as_bytes()).await?;
        file.flush().await?;
        Ok(handle)
    }

    pub async fn append_response(
        &self,
        handle: &LogHandle,
        response: &ChatCompletionResponse,
    ) -> Result<()> {
        let pretty = serde_json::to_string_pretty(response)?;
        append(handle, &format!("\nSimulated Response:\n{pretty}\n")).await
    }

    pub async fn append_status(&self, handle: &LogHandle, status: u16) -> Result<()> {
        append(handle, &format!("\nResponse Status Code: {status}\n")).await
    }
}

async fn append(handle: &LogHandle, text: &str) -> Result<()> {
    let mut file = OpenOptions::new().append(true).open(handle.path()).await?;
    file.write_all(text.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}

pub fn render_request(snapshot: &InboundRequest) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Time: {}", to_local_string(&snapshot.received_at));
    let _ = writeln!(out, "Client: {}", snapshot.client);
    let _ = writeln!(out, "Request Method: {}", snapshot.method);
    let _ = writeln!(out, "Request Path: {}", snapshot.path);
    let _ = writeln!(out, "Full URL: {}\n", snapshot.full_url);
    out.push_str("Headers:\n");
    for (key, value) in &snapshot.headers {
        let _ = writeln!(out, "{key}: {value}");
    }
    let _ = writeln!(out, "\nRequest Body:\n{}\n", snapshot.body);
    let _ = writeln!(out, "Query Parameters: {}", snapshot.query);
    out
}
