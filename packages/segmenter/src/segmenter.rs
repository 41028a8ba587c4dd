//! Segmentation service that ties all components together.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use crate::check::{check, ConsistencyReport};
use crate::config::{output_file_name, DEFAULT_LOG_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_WORKERS};
use crate::error::{Result, SegmenterError};
use crate::extraction::{ArgumentExtractor, ExtractionLog};
use crate::log::RunLog;
use crate::output::{save_judgment, WriteOutcome};
use crate::splitting::{create_judicial_catalog, split_sections, MarkerCatalog, Resegmenter};
use crate::types::{Jid, JudgmentRecord, SegmentedJudgment};

/// Everything produced for one judgment.
#[derive(Debug, Clone)]
pub struct Segmentation {
    pub judgment: SegmentedJudgment,
    pub extraction: ExtractionLog,
    pub report: ConsistencyReport,
    /// Log entries of this judgment alone.
    pub log: RunLog,
}

/// Runs the segmentation chain: sections, numbered blocks, argument spans,
/// consistency check.
#[derive(Debug, Clone)]
pub struct Segmenter {
    catalog: MarkerCatalog,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    /// Create a segmenter with the judicial marker catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(create_judicial_catalog())
    }

    #[must_use]
    pub fn with_catalog(catalog: MarkerCatalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &MarkerCatalog {
        &self.catalog
    }

    /// Segment one judgment.
    #[must_use]
    pub fn segment(&self, record: &JudgmentRecord) -> Segmentation {
        let sections = split_sections(record);
        let mut judgment =
            Resegmenter::new(&self.catalog).segment_map(&sections, output_file_name(&record.jid));

        let extraction = ArgumentExtractor::new(&self.catalog).extract(&record.jid, &mut judgment);
        let report = check(&judgment);

        let mut log = RunLog::new();
        log.record_extraction(&record.jid, &extraction);
        log.record_consistency(&judgment.file_name, &report);

        Segmentation {
            judgment,
            extraction,
            report,
            log,
        }
    }

    /// Segment every record in `input` and write results and logs.
    ///
    /// Files that cannot be read or parsed are logged and counted; they
    /// never abort the batch. `on_progress` is called once per file from
    /// the worker threads.
    pub fn segment_directory<F>(
        &self,
        input: &Path,
        options: &BatchOptions,
        on_progress: F,
    ) -> Result<BatchSummary>
    where
        F: Fn(&Path) + Sync,
    {
        let paths = collect_record_paths(input)?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(options.workers.max(1))
            .build()?;

        tracing::info!(
            files = paths.len(),
            workers = options.workers,
            input = %input.display(),
            "Segmenting judgments"
        );

        // Collecting an indexed parallel iterator keeps input order
        let results: Vec<(PathBuf, Result<(WriteOutcome, RunLog)>)> = pool.install(|| {
            paths
                .par_iter()
                .map(|path| {
                    let result = self.process_file(path, &options.output_dir);
                    on_progress(path);
                    (path.clone(), result)
                })
                .collect()
        });

        let mut summary = BatchSummary::default();
        for (path, result) in results {
            match result {
                Ok((outcome, log)) => {
                    match outcome {
                        WriteOutcome::Written(_) => summary.written += 1,
                        WriteOutcome::Skipped(_) => summary.skipped += 1,
                    }
                    summary.log.merge(log);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to segment file");
                    summary.failed.push(path);
                }
            }
        }

        summary.log.write_to_dir(&options.log_dir)?;

        tracing::info!(
            written = summary.written,
            skipped = summary.skipped,
            failed = summary.failed.len(),
            "Segmentation finished"
        );

        Ok(summary)
    }

    fn process_file(&self, path: &Path, output_dir: &Path) -> Result<(WriteOutcome, RunLog)> {
        let record = load_record(path)?;
        let segmentation = self.segment(&record);
        let outcome = save_judgment(&segmentation.judgment, output_dir)?;
        Ok((outcome, segmentation.log))
    }
}

/// Options for a directory batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    pub output_dir: PathBuf,
    pub log_dir: PathBuf,
    pub workers: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            workers: DEFAULT_WORKERS,
        }
    }
}

impl BatchOptions {
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}

/// Outcome of a directory batch.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// Judgments written to the output directory.
    pub written: usize,
    /// Judgments whose output already existed.
    pub skipped: usize,
    /// Files that could not be segmented.
    pub failed: Vec<PathBuf>,
    /// Merged run log, in input order.
    pub log: RunLog,
}

impl BatchSummary {
    #[must_use]
    pub fn processed(&self) -> usize {
        self.written + self.skipped
    }
}

/// Read a raw judgment record from a JSON file.
pub fn load_record(path: &Path) -> Result<JudgmentRecord> {
    let content = fs::read_to_string(path)?;
    let record: JudgmentRecord =
        serde_json::from_str(&content).map_err(|e| SegmenterError::InvalidRecord {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    Jid::parse(&record.jid)?;
    Ok(record)
}

/// Raw record files (`*.json`) in `dir`, sorted by path.
pub fn collect_record_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
