//! FJUD Segmenter - Split Taiwanese court judgments into sections and
//! argument spans.
//!
//! A raw judgment record (as published on the judiciary's FJUD site) is
//! divided into titled sections, each section is regrouped into numbered
//! blocks by enumeration marker, and the facts section is searched for the
//! plaintiff's claim, the defendant's response, the undisputed facts, the
//! court's reasoning and the disputed issues.
//!
//! # Example
//!
//! ```
//! use fjud_segmenter::{JudgmentRecord, Segmenter};
//!
//! let record = JudgmentRecord {
//!     jid: "TYDV,108,勞訴,12,20200101,1".to_string(),
//!     title: "給付工資".to_string(),
//!     case_type: "勞訴".to_string(),
//!     year: "108".to_string(),
//!     full_text: "民事判決\n事實及理由\n一、原告主張：被告積欠工資。\n二、被告則以：已給付。\n中華民國108年12月31日".to_string(),
//! };
//!
//! let segmentation = Segmenter::new().segment(&record);
//! let spans = segmentation.judgment.arguments.unwrap();
//! assert_eq!(spans.plaintiff_claim, vec!["一、原告主張：被告積欠工資。".to_string()]);
//! assert_eq!(spans.defendant_response, vec!["二、被告則以：已給付。".to_string()]);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Core data types (records, sections, spans)
//! - [`error`]: Error types and Result alias
//! - [`splitting`]: Marker catalog, section splitting and re-segmentation
//! - [`extraction`]: Argument span extraction
//! - [`check`]: Consistency checks
//! - [`log`]: Categorized run logs
//! - [`output`]: JSON output generation
//! - [`segmenter`]: Segmentation service and directory batches
//! - [`cli`]: Command-line interface

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod log;
pub mod output;
pub mod segmenter;
pub mod splitting;
pub mod types;

// Re-export commonly used items
pub use config::validate_jid;
pub use error::{Result, SegmenterError};
pub use segmenter::{BatchOptions, BatchSummary, Segmentation, Segmenter};
pub use types::{ArgumentRole, ArgumentSpans, Jid, JudgmentRecord, SegmentedJudgment};
