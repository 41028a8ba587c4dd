//! JSON writer for segmented judgments.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::JSON_INDENT;
use crate::error::Result;
use crate::types::SegmentedJudgment;

/// What happened to an output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(PathBuf),
    /// The file already existed and was left untouched.
    Skipped(PathBuf),
}

impl WriteOutcome {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Written(path) | Self::Skipped(path) => path,
        }
    }
}

/// Serialize a judgment as indented JSON, keeping CJK characters unescaped.
pub fn to_json(judgment: &SegmentedJudgment) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    judgment.serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Save a judgment as `<output_dir>/<file name>`.
///
/// Existing files are never overwritten.
pub fn save_judgment(judgment: &SegmentedJudgment, output_dir: &Path) -> Result<WriteOutcome> {
    let output_file = output_dir.join(&judgment.file_name);
    if output_file.exists() {
        tracing::warn!(path = %output_file.display(), "Output already exists, skipping");
        return Ok(WriteOutcome::Skipped(output_file));
    }

    fs::create_dir_all(output_dir)?;
    write_atomic(&output_file, to_json(judgment)?.as_bytes())?;

    Ok(WriteOutcome::Written(output_file))
}

/// Write `content` to `path` through a temp file in the same directory.
///
/// Data is synced before the rename so a crash never leaves a partial file
/// under the final name.
pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    let written = File::create(&temp_file)
        .and_then(|mut file| {
            file.write_all(content)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&temp_file, path));

    if let Err(e) = written {
        if let Err(cleanup) = fs::remove_file(&temp_file) {
            tracing::debug!(path = %temp_file.display(), error = %cleanup, "Temp file not removed");
        }
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ArgumentSpans, NumberedSegment, SectionName, SectionSegments};
    use tempfile::tempdir;

    fn create_test_judgment() -> SegmentedJudgment {
        let mut sections = SectionSegments::new();
        let mut holding = NumberedSegment::new();
        holding.push(1, "原告之訴駁回。");
        sections.insert(SectionName::MainHolding, holding);

        SegmentedJudgment {
            cause: "給付工資".to_string(),
            year: "108".to_string(),
            case_type: "勞訴".to_string(),
            title: "臺灣桃園地方法院民事判決".to_string(),
            sections,
            arguments: Some(ArgumentSpans::default()),
            file_name: "TYDV,108,勞訴,12,20200101,1.json".to_string(),
        }
    }

    #[test]
    fn test_to_json_indent_and_unicode() {
        let json = to_json(&create_test_judgment()).unwrap();

        assert!(json.starts_with("{\n    \"案由\": \"給付工資\""));
        assert!(json.contains("\"主文\": {\n        \"1\": [\n            \"原告之訴駁回。\""));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_save_judgment() {
        let judgment = create_test_judgment();
        let temp_dir = tempdir().unwrap();

        let outcome = save_judgment(&judgment, temp_dir.path()).unwrap();
        assert!(matches!(outcome, WriteOutcome::Written(_)));
        assert!(outcome.path().ends_with("TYDV,108,勞訴,12,20200101,1.json"));

        let content = fs::read_to_string(outcome.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["年份"], "108");
        assert!(value["事實及理由"]["原告主張"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_save_judgment_never_overwrites() {
        let judgment = create_test_judgment();
        let temp_dir = tempdir().unwrap();
        let existing = temp_dir.path().join(&judgment.file_name);
        fs::write(&existing, "keep").unwrap();

        let outcome = save_judgment(&judgment, temp_dir.path()).unwrap();
        assert_eq!(outcome, WriteOutcome::Skipped(existing.clone()));
        assert_eq!(fs::read_to_string(existing).unwrap(), "keep");
    }

    #[test]
    fn test_save_judgment_creates_directory() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("dataset");

        let outcome = save_judgment(&create_test_judgment(), &nested).unwrap();
        assert!(outcome.path().starts_with(&nested));
        assert!(!nested.join(".TYDV,108,勞訴,12,20200101,1.json.tmp").exists());
    }

    #[test]
    fn test_write_atomic_failure_removes_temp_file() {
        let temp_dir = tempdir().unwrap();
        // A directory under the target name makes the final rename fail
        let target = temp_dir.path().join("log_all.jsonl");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "").unwrap();

        assert!(write_atomic(&target, b"{}\n").is_err());
        assert!(!temp_dir.path().join(".log_all.jsonl.tmp").exists());
        assert!(target.join("keep").exists());
    }
}
