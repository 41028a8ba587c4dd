//! End-to-end integration tests for the segmentation pipeline.
//!
//! Runs the complete chain from raw judgment records to segmented JSON and
//! run logs using fixture judgments under `tests/fixtures/judgments`.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::tempdir;

use fjud_segmenter::log::LogCategory;
use fjud_segmenter::output::to_json;
use fjud_segmenter::segmenter::load_record;
use fjud_segmenter::types::SectionName;
use fjud_segmenter::{ArgumentRole, BatchOptions, JudgmentRecord, Segmentation, Segmenter};

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("judgments")
}

/// Segment a fixture judgment.
fn segment_fixture(name: &str) -> Segmentation {
    let path = fixture_dir().join(format!("{name}.json"));
    let record = load_record(&path).unwrap_or_else(|e| panic!("Failed to load {}: {e}", path.display()));
    Segmenter::new().segment(&record)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_combined_section_spans() {
    let segmentation = segment_fixture("combined");
    let judgment = &segmentation.judgment;

    assert_eq!(judgment.title, "臺灣桃園地方法院民事判決108年度勞訴字第12號");
    assert_eq!(judgment.year, "108");
    assert_eq!(judgment.file_name, "TYDV,108,勞訴,12,20191231,1.json");
    assert_eq!(
        judgment.sections.get(SectionName::MainHolding).unwrap().flatten(),
        strings(&["原告之訴駁回。", "訴訟費用由原告負擔。"])
    );
    assert!(!judgment.sections.contains(SectionName::FactsAndReasoning));

    let spans = judgment.arguments.as_ref().unwrap();
    assert_eq!(
        spans.plaintiff_claim,
        strings(&[
            "一、原告主張：",
            "（一）原告自民國100年起受僱於被告，每月工資新臺幣3萬元。",
            "（二）被告積欠工資，爰依法起訴。",
        ])
    );
    assert_eq!(
        spans.defendant_response,
        strings(&["二、被告則以：原告已於離職時領取全部工資等語，資為抗辯。"])
    );
    assert_eq!(
        spans.undisputed_facts,
        strings(&["三、兩造不爭執事項：", "（一）原告受僱於被告。"])
    );
    assert_eq!(
        spans.court_reasoning,
        strings(&[
            "四、本院之判斷：",
            "（一）原告請求無理由。",
            "（二）綜上所述，原告之訴駁回。",
        ])
    );
    assert!(spans.disputed_issues.is_empty());

    assert!(segmentation.extraction.is_clean());
    assert!(segmentation.report.is_clean());
    assert!(segmentation.log.is_empty());
}

#[test]
fn test_closing_date_never_leaks() {
    for name in ["combined", "no_markers", "dual_layout", "waiver", "loose_reasoning"] {
        let json = to_json(&segment_fixture(name).judgment).unwrap();
        assert!(!json.contains("中華民國"), "{name}");
        assert!(!json.contains("法官"), "{name}");
    }
}

#[test]
fn test_unnumbered_party_lines_open_their_own_spans() {
    let record = JudgmentRecord {
        jid: "TPDV,100,勞訴,1,20110101,1".to_string(),
        title: "給付工資".to_string(),
        case_type: "勞訴".to_string(),
        year: "100".to_string(),
        full_text: [
            "标题行",
            "事實",
            "原告主張：（一）原告主張A。（二）原告主張B。",
            "被告則以：（一）被告辯稱C。",
            "中華民國100年1月1日",
        ]
        .join("\n"),
    };
    let segmentation = Segmenter::new().segment(&record);
    let judgment = &segmentation.judgment;

    let spans = judgment.arguments.as_ref().unwrap();
    // The plaintiff's closing marker （二） never heads a chunk, so the
    // span runs on to the end of the section
    assert_eq!(
        spans.plaintiff_claim,
        strings(&[
            "原告主張：（一）原告主張A。（二）原告主張B。",
            "被告則以：（一）被告辯稱C。",
        ])
    );
    assert_eq!(spans.defendant_response, strings(&["被告則以：（一）被告辯稱C。"]));
    assert!(segmentation.extraction.second_search.is_empty());
    assert!(!segmentation.extraction.notation);

    assert!(!judgment.sections.contains(SectionName::MainHolding));
    assert!(!judgment.sections.contains(SectionName::Facts));
    assert!(!to_json(judgment).unwrap().contains("中華民國"));
}

#[test]
fn test_no_markers_logs_notation_once() {
    let segmentation = segment_fixture("no_markers");

    let spans = segmentation.judgment.arguments.as_ref().unwrap();
    assert!(spans.is_empty());

    let notation = segmentation.log.entries(LogCategory::Notation);
    assert_eq!(notation.len(), 1);
    assert_eq!(notation[0].key, "TPDV,109,勞簡,3,20200101,1");
    assert_eq!(notation[0].payload, json!("notation"));
}

#[test]
fn test_dual_layout_uses_whole_reasoning_section() {
    let segmentation = segment_fixture("dual_layout");
    let judgment = &segmentation.judgment;

    let spans = judgment.arguments.as_ref().unwrap();
    assert_eq!(
        spans.plaintiff_claim,
        strings(&["一、上訴人方面：聲明求為判決被上訴人應給付工資。"])
    );
    assert_eq!(spans.defendant_response, strings(&["二、被上訴人方面：聲明駁回上訴。"]));
    assert_eq!(
        spans.court_reasoning,
        strings(&[
            "一、按勞工請求工資，應由勞工負舉證責任。",
            "二、查上訴人未能舉證，其請求自屬無據。",
        ])
    );

    assert_eq!(
        segmentation.extraction.second_search,
        vec![ArgumentRole::CourtReasoning]
    );
    assert_eq!(
        segmentation.log.entries(LogCategory::SecondSearch)[0].payload,
        json!(["法院心證"])
    );
    assert!(!judgment.sections.contains(SectionName::Facts));
    assert!(!judgment.sections.contains(SectionName::Reasoning));
    assert!(judgment.sections.contains(SectionName::MainHolding));
}

#[test]
fn test_waiver_stands_in_for_defendant() {
    let segmentation = segment_fixture("waiver");

    let spans = segmentation.judgment.arguments.as_ref().unwrap();
    assert_eq!(spans.defendant_response, strings(&["被告未於言詞辯論期日到場"]));
    assert_eq!(
        spans.court_reasoning,
        strings(&["三、本院之判斷：原告之主張堪信為真實。"])
    );

    assert!(segmentation.extraction.waiver);
    assert_eq!(
        segmentation.log.entries(LogCategory::Waiver)[0].payload,
        json!("未於言詞辯論期日到場")
    );
    assert_eq!(
        segmentation.log.entries(LogCategory::SecondSearch)[0].payload,
        json!(["被告則以"])
    );
    assert_eq!(
        segmentation.log.entries(LogCategory::Fact)[0].payload,
        json!(["不爭議項", "爭議事項"])
    );
}

#[test]
fn test_loose_reasoning_retry() {
    let segmentation = segment_fixture("loose_reasoning");

    let spans = segmentation.judgment.arguments.as_ref().unwrap();
    assert_eq!(spans.court_reasoning, strings(&["三、經查：原告未能證明有加班事實。"]));
    assert_eq!(spans.defendant_response, strings(&["二、被告則以：原告未加班。"]));
    assert!(!segmentation.extraction.notation);
}

#[test]
fn test_ambiguous_sections_left_unsegmented() {
    let segmentation = segment_fixture("ambiguous");
    let judgment = &segmentation.judgment;

    assert!(judgment.arguments.is_none());
    let names: Vec<SectionName> = judgment.sections.names().collect();
    assert_eq!(
        names,
        vec![
            SectionName::MainHolding,
            SectionName::Facts,
            SectionName::Reasoning,
            SectionName::FactsAndReasoning,
        ]
    );
    assert_eq!(
        segmentation.log.entries(LogCategory::Title)[0].payload,
        json!("有多個事實或理由")
    );
    assert_eq!(segmentation.report.empty_arguments.len(), 5);
}

#[test]
fn test_body_fallback_without_titles() {
    let segmentation = segment_fixture("body_only");
    let value: Value = serde_json::from_str(&to_json(&segmentation.judgment).unwrap()).unwrap();

    assert_eq!(value["內文"], json!({"1": ["聲請駁回。"]}));
    assert!(value.get("事實及理由").is_none());
    assert_eq!(
        segmentation.log.entries(LogCategory::Title)[0].payload,
        json!("無事實或理由及主文")
    );
    assert_eq!(
        segmentation.log.entries(LogCategory::All)[0].payload,
        json!(["主文", "事實及理由"])
    );
    assert_eq!(
        segmentation.log.entries(LogCategory::Fact)[0].payload,
        json!(["all keys are empty"])
    );
}

#[test]
fn test_segmentation_is_deterministic() {
    let first = segment_fixture("combined");
    let second = segment_fixture("combined");
    assert_eq!(first.judgment, second.judgment);
    assert_eq!(first.log, second.log);
}

#[test]
fn test_segment_directory_end_to_end() {
    let work = tempdir().unwrap();
    let output = work.path().join("dataset");
    let logs = work.path().join("logs");

    let options = BatchOptions::default()
        .with_output_dir(&output)
        .with_log_dir(&logs)
        .with_workers(4);
    let summary = Segmenter::new()
        .segment_directory(&fixture_dir(), &options, |_| {})
        .unwrap();

    assert_eq!(summary.written, 7);
    assert!(summary.failed.is_empty());

    let saved = fs::read_to_string(output.join("PCDV,110,勞小,4,20210301,1.json")).unwrap();
    assert!(saved.starts_with("{\n    \"案由\": \"給付工資\""));

    // Title log entries follow sorted input order
    let titles = fs::read_to_string(logs.join("log_title.jsonl")).unwrap();
    let lines: Vec<&str> = titles.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#"{"KSDV,95,勞訴,2,20060601,1":"有多個事實或理由"}"#,
            r#"{"SLDV,112,聲,1,20230101,1":"無事實或理由及主文"}"#,
        ]
    );

    // A second run never overwrites
    let rerun = Segmenter::new()
        .segment_directory(&fixture_dir(), &options, |_| {})
        .unwrap();
    assert_eq!(rerun.written, 0);
    assert_eq!(rerun.skipped, 7);
    assert_eq!(fs::read_to_string(logs.join("log_title.jsonl")).unwrap(), titles);
}

#[test]
fn test_cli_segment() {
    let work = tempdir().unwrap();
    let output = work.path().join("dataset");

    Command::cargo_bin("fjud-segmenter")
        .unwrap()
        .arg("segment")
        .arg(fixture_dir())
        .arg("-o")
        .arg(&output)
        .arg("-l")
        .arg(work.path().join("logs"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Written: 7"));

    assert!(output.join("TYDV,108,勞訴,12,20191231,1.json").exists());
}

#[test]
fn test_cli_inspect_json() {
    Command::cargo_bin("fjud-segmenter")
        .unwrap()
        .arg("inspect")
        .arg(fixture_dir().join("waiver.json"))
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"被告則以\": [\n            \"被告未於言詞辯論期日到場\""));
}

#[test]
fn test_cli_missing_input_fails() {
    Command::cargo_bin("fjud-segmenter")
        .unwrap()
        .args(["segment", "/nonexistent/fjud-input"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: IO error: Input directory does not exist"));
}
