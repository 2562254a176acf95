//! Detection history store.
//!
//! Append-only JSONL file under the user data directory, bounded retention,
//! newest first on readback. History I/O degrades gracefully: a failed
//! write is logged and never fails the analysis that produced the record.

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use veritas_common::{AnalysisResult, DetectionRecord};

/// Schema version for history records
const SCHEMA_VERSION: u8 = 1;

/// Bounded retention: last N records
const RETENTION_RECORDS: usize = 20;

/// Stored content is truncated to a preview of this many characters.
const CONTENT_PREVIEW_CHARS: usize = 200;

const HISTORY_FILENAME: &str = "history.jsonl";

pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform data dir (`~/.local/share/veritas` on
    /// Linux), falling back to the current directory.
    pub fn default_location() -> Self {
        let dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("veritas");
        Self::new(dir.join(HISTORY_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a detection record. Content is truncated to a preview;
    /// retention is pruned after the write.
    pub fn record(&self, content: &str, result: &AnalysisResult) -> Result<()> {
        let record = DetectionRecord {
            schema_version: SCHEMA_VERSION,
            timestamp: Utc::now(),
            content: truncate_preview(content),
            result: result.clone(),
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating history dir {}", parent.display()))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;

        let line = serde_json::to_string(&record)?;
        writeln!(file, "{}", line)?;
        debug!("Recorded detection to {}", self.path.display());

        self.prune()?;
        Ok(())
    }

    /// Like `record`, but never propagates failure.
    pub fn record_best_effort(&self, content: &str, result: &AnalysisResult) {
        if let Err(e) = self.record(content, result) {
            warn!("Failed to record detection history: {:#}", e);
        }
    }

    /// Most recent records, newest first, at most `limit`.
    pub fn recent(&self, limit: usize) -> Result<Vec<DetectionRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        let reader = BufReader::new(file);

        let mut records: Vec<DetectionRecord> = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(record) => records.push(record),
                // Skip corrupt lines rather than losing the whole history.
                Err(e) => warn!("Skipping corrupt history line: {}", e),
            }
        }

        records.reverse();
        records.truncate(limit);
        Ok(records)
    }

    /// Rewrite the file keeping only the newest `RETENTION_RECORDS` lines.
    fn prune(&self) -> Result<()> {
        let file = File::open(&self.path)?;
        let lines: Vec<String> = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<_>>()?;

        if lines.len() <= RETENTION_RECORDS {
            return Ok(());
        }

        let keep = &lines[lines.len() - RETENTION_RECORDS..];
        let tmp = self.path.with_extension("jsonl.tmp");
        {
            let mut out = File::create(&tmp)?;
            for line in keep {
                writeln!(out, "{}", line)?;
            }
        }
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn truncate_preview(content: &str) -> String {
    if content.chars().count() <= CONTENT_PREVIEW_CHARS {
        content.to_string()
    } else {
        let preview: String = content.chars().take(CONTENT_PREVIEW_CHARS).collect();
        format!("{}...", preview)
    }
}
