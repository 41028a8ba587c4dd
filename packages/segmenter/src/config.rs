//! Configuration constants and validation functions for the segmenter.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::Result;
use crate::types::Jid;

/// Section titles that open a new section when they stand alone on a line.
///
/// Characters may be separated by whitespace in the source text
/// (e.g. "事　　實").
pub const SECTION_TITLES: [&str; 5] = ["主文", "事實", "理由", "事實及理由", "事實及理由要領"];

/// Number of leading characters searched for a span's enumeration marker
/// on the first attempt.
pub const NOTATION_HEAD_SHORT: usize = 10;

/// Number of leading characters searched on the second attempt.
pub const NOTATION_HEAD_LONG: usize = 50;

/// Number of leading characters of a chunk checked for the closing marker
/// while capturing a span.
pub const BOUNDARY_HEAD: usize = 50;

/// Default number of parallel workers for batch segmentation.
pub const DEFAULT_WORKERS: usize = 8;

/// Default directory for segmented judgments.
pub const DEFAULT_OUTPUT_DIR: &str = "dataset";

/// Default directory for run logs.
pub const DEFAULT_LOG_DIR: &str = "logs/extraction";

/// Synthetic defendant chunk used when the defendant waived the hearing.
pub const WAIVER_CHUNK: &str = "被告未於言詞辯論期日到場";

/// Payload written to the waiver log.
pub const WAIVER_LOG_MESSAGE: &str = "未於言詞辯論期日到場";

/// Payload written to the notation log.
pub const NOTATION_LOG_MESSAGE: &str = "notation";

/// Indentation used for persisted judgment JSON.
pub const JSON_INDENT: &[u8] = b"    ";

/// Text wrap width for `inspect` output.
pub const TEXT_WRAP_WIDTH: usize = 60;

/// JID pattern: court, year, case type, number, date and optional version.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
pub(crate) static JID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]+),(\d{1,4}),([^,\s]+),(\d+),(\d{8})(?:,(\d+))?$").expect("valid regex")
});

/// Validate a judgment identifier, including its calendar date.
///
/// # Examples
/// ```
/// use fjud_segmenter::config::validate_jid;
///
/// assert!(validate_jid("TYDV,108,勞訴,12,20200101,1").is_ok());
/// assert!(validate_jid("TYDV,108,勞訴,12,20200101").is_ok());
/// assert!(validate_jid("not a jid").is_err());
/// ```
pub fn validate_jid(jid: &str) -> Result<()> {
    Jid::parse(jid).map(|_| ())
}

/// Name of the persisted file for a judgment.
#[must_use]
pub fn output_file_name(jid: &str) -> String {
    format!("{jid}.json")
}
