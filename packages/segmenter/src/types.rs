//! Core data types for the segmenter.
//!
//! These types follow a judgment through the pipeline: the raw record as
//! published by the judiciary, its titled sections, the numbered segments
//! of each section, and the final record with argument spans.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::JID_PATTERN;
use crate::error::{Result, SegmenterError};

/// A raw judgment record as retrieved from the judiciary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgmentRecord {
    /// Judgment identifier.
    #[serde(rename = "JID")]
    pub jid: String,

    /// Cause of action (案由).
    #[serde(rename = "JTITLE", default)]
    pub title: String,

    /// Case-type token (字別).
    #[serde(rename = "JCASE", default)]
    pub case_type: String,

    /// Year (年份), published either as a string or a number.
    #[serde(rename = "JYEAR", default, deserialize_with = "string_or_number")]
    pub year: String,

    /// Full judgment text with embedded newlines.
    #[serde(rename = "JFULL", default)]
    pub full_text: String,
}

impl JudgmentRecord {
    /// Lines of the full text, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.full_text.lines()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

/// Parsed judgment identifier.
///
/// Format: `court,year,case-type,number,YYYYMMDD[,version]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jid {
    /// Court code (e.g. "TYDV" for 桃園地方法院).
    pub court: String,
    /// Republic-of-China year of the case.
    pub year: u32,
    /// Case-type token (e.g. "勞訴").
    pub case_type: String,
    /// Sequence number within year and case type.
    pub number: u32,
    /// Date of the judgment.
    pub date: NaiveDate,
    /// Version suffix, absent for unversioned identifiers.
    pub version: Option<u32>,
}

impl Jid {
    /// Parse a judgment identifier.
    ///
    /// # Examples
    /// ```
    /// use fjud_segmenter::types::Jid;
    ///
    /// let jid = Jid::parse("TYDV,108,勞訴,12,20200101,1").unwrap();
    /// assert_eq!(jid.court, "TYDV");
    /// assert_eq!(jid.version, Some(1));
    /// assert_eq!(jid.without_version(), "TYDV,108,勞訴,12,20200101");
    /// ```
    pub fn parse(jid: &str) -> Result<Self> {
        let invalid = || SegmenterError::InvalidJid(jid.to_string());
        let caps = JID_PATTERN.captures(jid).ok_or_else(invalid)?;

        let year = caps[2].parse().map_err(|_| invalid())?;
        let number = caps[4].parse().map_err(|_| invalid())?;
        let date = NaiveDate::parse_from_str(&caps[5], "%Y%m%d").map_err(|_| invalid())?;
        let version = caps
            .get(6)
            .map(|v| v.as_str().parse())
            .transpose()
            .map_err(|_| invalid())?;

        Ok(Self {
            court: caps[1].to_string(),
            year,
            case_type: caps[3].to_string(),
            number,
            date,
            version,
        })
    }

    /// The identifier without its version suffix.
    #[must_use]
    pub fn without_version(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.court,
            self.year,
            self.case_type,
            self.number,
            self.date.format("%Y%m%d")
        )
    }
}

impl fmt::Display for Jid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.without_version())?;
        if let Some(version) = self.version {
            write!(f, ",{version}")?;
        }
        Ok(())
    }
}

/// Names of the sections a judgment is divided into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionName {
    /// 主文: the main holding.
    MainHolding,
    /// 事實: facts, in older judgments.
    Facts,
    /// 理由: reasoning, in older judgments.
    Reasoning,
    /// 事實及理由: combined facts and reasoning.
    FactsAndReasoning,
    /// 事實及理由要領: summary of facts and reasoning.
    FactsAndReasoningSummary,
    /// 內文: catch-all body for judgments without section titles.
    Body,
}

impl SectionName {
    /// Sections that can carry the parties' arguments, in selection priority.
    pub const ARGUMENT_SOURCES: [SectionName; 4] = [
        SectionName::Facts,
        SectionName::Reasoning,
        SectionName::FactsAndReasoning,
        SectionName::FactsAndReasoningSummary,
    ];

    /// Get the key used in persisted records.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MainHolding => "主文",
            Self::Facts => "事實",
            Self::Reasoning => "理由",
            Self::FactsAndReasoning => "事實及理由",
            Self::FactsAndReasoningSummary => "事實及理由要領",
            Self::Body => "內文",
        }
    }

    /// Parse a whitespace-free section title line.
    #[must_use]
    pub fn from_title(title: &str) -> Option<Self> {
        match title {
            "主文" => Some(Self::MainHolding),
            "事實" => Some(Self::Facts),
            "理由" => Some(Self::Reasoning),
            "事實及理由" => Some(Self::FactsAndReasoning),
            "事實及理由要領" => Some(Self::FactsAndReasoningSummary),
            _ => None,
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A titled section and its raw lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: SectionName,
    pub lines: Vec<String>,
}

/// A judgment divided into titled sections, before re-segmentation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionMap {
    /// First line of the judgment text.
    pub title: String,
    /// Cause of action (案由).
    pub cause: String,
    /// Year (年份).
    pub year: String,
    /// Case type (字別).
    pub case_type: String,
    /// Sections in order of first appearance.
    pub sections: Vec<Section>,
}

impl SectionMap {
    /// Create an empty map carrying the record's metadata.
    #[must_use]
    pub fn new(
        cause: impl Into<String>,
        year: impl Into<String>,
        case_type: impl Into<String>,
    ) -> Self {
        Self {
            title: String::new(),
            cause: cause.into(),
            year: year.into(),
            case_type: case_type.into(),
            sections: Vec::new(),
        }
    }

    /// Open a section, discarding earlier lines if it was already open.
    pub fn open(&mut self, name: SectionName) {
        match self.sections.iter_mut().find(|s| s.name == name) {
            Some(section) => section.lines.clear(),
            None => self.sections.push(Section {
                name,
                lines: Vec::new(),
            }),
        }
    }

    /// Append a line to an opened section.
    pub fn push_line(&mut self, name: SectionName, line: impl Into<String>) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.name == name) {
            section.lines.push(line.into());
        }
    }

    /// Lines of a section, if present.
    #[must_use]
    pub fn get(&self, name: SectionName) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.lines.as_slice())
    }

    /// Whether no section has been opened.
    #[must_use]
    pub fn has_no_sections(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Top-level numbered blocks of a section.
///
/// Index `n` holds the chunks of the n-th top-level enumerated block: the
/// block's own text followed by one chunk per nested sub-item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct NumberedSegment(BTreeMap<usize, Vec<String>>);

impl NumberedSegment {
    /// Create an empty segment mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk to the block at `index`.
    pub fn push(&mut self, index: usize, chunk: impl Into<String>) {
        self.0.entry(index).or_default().push(chunk.into());
    }

    /// Chunks of the block at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[String]> {
        self.0.get(&index).map(Vec::as_slice)
    }

    /// Number of top-level blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Block indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.keys().copied()
    }

    /// All chunks in block order.
    #[must_use]
    pub fn flatten(&self) -> Vec<String> {
        self.0.values().flatten().cloned().collect()
    }

    /// Whether every chunk is empty.
    #[must_use]
    pub fn has_no_text(&self) -> bool {
        self.0.values().flatten().all(String::is_empty)
    }
}

/// The five argumentative roles extracted from a judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentRole {
    /// 原告主張
    PlaintiffClaim,
    /// 被告則以
    DefendantResponse,
    /// 不爭議項
    UndisputedFacts,
    /// 法院心證
    CourtReasoning,
    /// 爭議事項
    DisputedIssues,
}

impl ArgumentRole {
    /// All roles, in output order.
    pub const ALL: [ArgumentRole; 5] = [
        ArgumentRole::PlaintiffClaim,
        ArgumentRole::DefendantResponse,
        ArgumentRole::UndisputedFacts,
        ArgumentRole::CourtReasoning,
        ArgumentRole::DisputedIssues,
    ];

    /// Get the key used in persisted records and logs.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::PlaintiffClaim => "原告主張",
            Self::DefendantResponse => "被告則以",
            Self::UndisputedFacts => "不爭議項",
            Self::CourtReasoning => "法院心證",
            Self::DisputedIssues => "爭議事項",
        }
    }

    /// English label for terminal output.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::PlaintiffClaim => "plaintiff claim",
            Self::DefendantResponse => "defendant response",
            Self::UndisputedFacts => "undisputed facts",
            Self::CourtReasoning => "court reasoning",
            Self::DisputedIssues => "disputed issues",
        }
    }
}

impl fmt::Display for ArgumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The five argument spans of a judgment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ArgumentSpans {
    #[serde(rename = "原告主張")]
    pub plaintiff_claim: Vec<String>,
    #[serde(rename = "被告則以")]
    pub defendant_response: Vec<String>,
    #[serde(rename = "不爭議項")]
    pub undisputed_facts: Vec<String>,
    #[serde(rename = "法院心證")]
    pub court_reasoning: Vec<String>,
    #[serde(rename = "爭議事項")]
    pub disputed_issues: Vec<String>,
}

impl ArgumentSpans {
    /// Chunks of a span.
    #[must_use]
    pub fn get(&self, role: ArgumentRole) -> &[String] {
        match role {
            ArgumentRole::PlaintiffClaim => &self.plaintiff_claim,
            ArgumentRole::DefendantResponse => &self.defendant_response,
            ArgumentRole::UndisputedFacts => &self.undisputed_facts,
            ArgumentRole::CourtReasoning => &self.court_reasoning,
            ArgumentRole::DisputedIssues => &self.disputed_issues,
        }
    }

    /// Replace the chunks of a span.
    pub fn set(&mut self, role: ArgumentRole, chunks: Vec<String>) {
        let slot = match role {
            ArgumentRole::PlaintiffClaim => &mut self.plaintiff_claim,
            ArgumentRole::DefendantResponse => &mut self.defendant_response,
            ArgumentRole::UndisputedFacts => &mut self.undisputed_facts,
            ArgumentRole::CourtReasoning => &mut self.court_reasoning,
            ArgumentRole::DisputedIssues => &mut self.disputed_issues,
        };
        *slot = chunks;
    }

    /// Whether every span is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        ArgumentRole::ALL.iter().all(|role| self.get(*role).is_empty())
    }
}

/// Re-segmented sections, kept in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionSegments(Vec<(SectionName, NumberedSegment)>);

impl SectionSegments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: SectionName, segment: NumberedSegment) {
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = segment,
            None => self.0.push((name, segment)),
        }
    }

    #[must_use]
    pub fn get(&self, name: SectionName) -> Option<&NumberedSegment> {
        self.0.iter().find(|(n, _)| *n == name).map(|(_, s)| s)
    }

    #[must_use]
    pub fn contains(&self, name: SectionName) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: SectionName) -> Option<NumberedSegment> {
        let position = self.0.iter().position(|(n, _)| *n == name)?;
        Some(self.0.remove(position).1)
    }

    /// Section names in order.
    pub fn names(&self) -> impl Iterator<Item = SectionName> + '_ {
        self.0.iter().map(|(n, _)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionName, &NumberedSegment)> {
        self.0.iter().map(|(n, s)| (*n, s))
    }
}

impl Serialize for SectionSegments {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, segment) in &self.0 {
            map.serialize_entry(name.as_str(), segment)?;
        }
        map.end()
    }
}

/// A fully processed judgment, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentedJudgment {
    #[serde(rename = "案由")]
    pub cause: String,

    #[serde(rename = "年份")]
    pub year: String,

    #[serde(rename = "字別")]
    pub case_type: String,

    /// First line of the judgment, whitespace removed.
    #[serde(rename = "標題")]
    pub title: String,

    /// Sections not consumed by argument extraction.
    #[serde(flatten)]
    pub sections: SectionSegments,

    /// Argument spans; absent when extraction could not choose a section.
    #[serde(rename = "事實及理由", skip_serializing_if = "Option::is_none")]
    pub arguments: Option<ArgumentSpans>,

    #[serde(rename = "檔案名稱")]
    pub file_name: String,
}
