//! Run logs of flagged judgments.
//!
//! Every category collects one entry per flagged judgment. Logs from
//! different workers are merged in input order and written as JSON Lines.

use std::fmt;
use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};

use crate::check::ConsistencyReport;
use crate::config::{NOTATION_LOG_MESSAGE, WAIVER_LOG_MESSAGE};
use crate::error::Result;
use crate::extraction::ExtractionLog;
use crate::output::{write_atomic, WriteOutcome};

/// Categories of the run log, one file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogCategory {
    /// Present but empty top-level keys.
    All,
    /// Empty or missing argument spans.
    Fact,
    /// Facts section anomalies.
    Title,
    /// Spans whose enumeration marker could not be located.
    Notation,
    /// Spans that needed a fallback search.
    SecondSearch,
    /// Defendants who did not appear at the hearing.
    Waiver,
}

impl LogCategory {
    /// All categories, in file order.
    pub const ALL: [LogCategory; 6] = [
        LogCategory::All,
        LogCategory::Fact,
        LogCategory::Title,
        LogCategory::Notation,
        LogCategory::SecondSearch,
        LogCategory::Waiver,
    ];

    #[must_use]
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::All => "log_all.jsonl",
            Self::Fact => "log_fact.jsonl",
            Self::Title => "log_title.jsonl",
            Self::Notation => "log_notation.jsonl",
            Self::SecondSearch => "log_2nd.jsonl",
            Self::Waiver => "log_waiver.jsonl",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::All => 0,
            Self::Fact => 1,
            Self::Title => 2,
            Self::Notation => 3,
            Self::SecondSearch => 4,
            Self::Waiver => 5,
        }
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// One flagged judgment, serialized as `{"<key>": <payload>}`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub key: String,
    pub payload: Value,
}

impl Serialize for LogEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.payload)?;
        map.end()
    }
}

/// Categorized log collections of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunLog {
    categories: [Vec<LogEntry>; 6],
}

impl RunLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to a category.
    pub fn push(&mut self, category: LogCategory, key: impl Into<String>, payload: Value) {
        self.categories[category.index()].push(LogEntry {
            key: key.into(),
            payload,
        });
    }

    /// Record the extractor's findings for one judgment, keyed by JID.
    pub fn record_extraction(&mut self, jid: &str, log: &ExtractionLog) {
        if let Some(anomaly) = log.title {
            self.push(LogCategory::Title, jid, json!(anomaly.message()));
        }
        if log.notation {
            self.push(LogCategory::Notation, jid, json!(NOTATION_LOG_MESSAGE));
        }
        if !log.second_search.is_empty() {
            let roles: Vec<&str> = log.second_search.iter().map(|role| role.key()).collect();
            self.push(LogCategory::SecondSearch, jid, json!(roles));
        }
        if log.waiver {
            self.push(LogCategory::Waiver, jid, json!(WAIVER_LOG_MESSAGE));
        }
    }

    /// Record a consistency report, keyed by the judgment's file name.
    pub fn record_consistency(&mut self, file_name: &str, report: &ConsistencyReport) {
        if !report.empty_keys.is_empty() {
            self.push(LogCategory::All, file_name, json!(report.empty_keys));
        }
        if !report.empty_arguments.is_empty() {
            self.push(LogCategory::Fact, file_name, json!(report.empty_arguments));
        }
    }

    /// Append another run's entries after this one's.
    pub fn merge(&mut self, other: RunLog) {
        for (mine, theirs) in self.categories.iter_mut().zip(other.categories) {
            mine.extend(theirs);
        }
    }

    /// Entries of a category, in input order.
    #[must_use]
    pub fn entries(&self, category: LogCategory) -> &[LogEntry] {
        &self.categories[category.index()]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(Vec::is_empty)
    }

    /// Number of flagged judgments per category.
    pub fn counts(&self) -> impl Iterator<Item = (LogCategory, usize)> + '_ {
        LogCategory::ALL
            .into_iter()
            .map(|category| (category, self.entries(category).len()))
    }

    /// Write one JSON Lines file per category into `dir`.
    ///
    /// A log file that already exists is left untouched.
    pub fn write_to_dir(&self, dir: &Path) -> Result<Vec<WriteOutcome>> {
        std::fs::create_dir_all(dir)?;

        let mut outcomes = Vec::with_capacity(LogCategory::ALL.len());
        for category in LogCategory::ALL {
            let path = dir.join(category.file_name());
            if path.exists() {
                tracing::warn!(path = %path.display(), "Log file already exists, skipping");
                outcomes.push(WriteOutcome::Skipped(path));
                continue;
            }

            let mut content = String::new();
            for entry in self.entries(category) {
                content.push_str(&serde_json::to_string(entry)?);
                content.push('\n');
            }
            write_atomic(&path, content.as_bytes())?;
            outcomes.push(WriteOutcome::Written(path));
        }

        Ok(outcomes)
    }
}
