//! Section splitting.
//!
//! A judgment body looks like:
//!
//! ```text
//! 臺灣桃園地方法院民事判決　　108年度勞訴字第12號     <- title (line 1)
//! 原　　　告　王大明                               <- party designations
//! 主　　文                                        <- section title
//! ...
//! 事實及理由                                       <- section title
//! ...
//! 中　　華　　民　　國　108　年　12　月　31　日      <- closing date, stop
//! ```

use regex::Regex;
use std::sync::LazyLock;

use crate::config::SECTION_TITLES;
use crate::types::{JudgmentRecord, SectionMap, SectionName};

/// A line holding only a section title, characters optionally spaced out.
#[allow(clippy::expect_used)] // Pattern built from constant titles
static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let titles: Vec<String> = SECTION_TITLES
        .iter()
        .map(|title| {
            title
                .chars()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(r"\s*")
        })
        .collect();
    Regex::new(&format!(r"^\s*({})\s*$", titles.join("|"))).expect("valid regex")
});

/// Closing date line in the Republic-of-China calendar.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*中\s*華\s*民\s*國.*年.*月.*日\s*$").expect("valid regex"));

/// Party designation line (e.g. "原　　告", "上　訴　人", "上列當事人間").
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PARTY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:.\s+.\s+人|原\s+告|上列)").expect("valid regex"));

/// Section title on a line, if the line is one.
#[must_use]
pub fn match_section_title(line: &str) -> Option<SectionName> {
    if !TITLE_PATTERN.is_match(line) {
        return None;
    }
    SectionName::from_title(&strip_whitespace(line))
}

/// Whether a line is the closing date of the judgment.
#[must_use]
pub fn is_closing_date(line: &str) -> bool {
    DATE_PATTERN.is_match(line)
}

/// Whether a line designates a party to the case.
#[must_use]
pub fn is_party_designation(line: &str) -> bool {
    PARTY_PATTERN.is_match(line)
}

/// Remove every whitespace character, including full-width spaces.
#[must_use]
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Split a judgment into titled sections.
///
/// The first line is the title. Each title line opens a section that
/// collects the following (trimmed) lines; the closing date line ends the
/// substantive content. Judgments without any section title fall back to a
/// single [`SectionName::Body`] section opened by the first party line.
#[must_use]
pub fn split_sections(record: &JudgmentRecord) -> SectionMap {
    let lines: Vec<&str> = record.lines().collect();
    let mut map = SectionMap::new(&record.title, &record.year, &record.case_type);

    if let Some(first) = lines.first() {
        map.title = (*first).to_string();
    }

    let mut current: Option<SectionName> = None;
    for line in &lines {
        if let Some(name) = match_section_title(line) {
            map.open(name);
            current = Some(name);
        } else if is_closing_date(line) {
            break;
        } else if let Some(name) = current {
            map.push_line(name, line.trim());
        }
    }

    if map.has_no_sections() {
        split_body(&lines, &mut map);
    }

    tracing::debug!(
        jid = %record.jid,
        sections = ?map.sections.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
        "Split judgment into sections"
    );

    map
}

/// Fallback for judgments without section titles.
///
/// Lines after the first party designation up to the closing date form
/// the body. Party lines themselves are skipped.
fn split_body(lines: &[&str], map: &mut SectionMap) {
    let mut opened = false;
    for line in lines {
        if is_party_designation(line) {
            if !opened {
                map.open(SectionName::Body);
                opened = true;
            }
            continue;
        }
        if is_closing_date(line) {
            break;
        }
        if opened {
            map.push_line(SectionName::Body, *line);
        }
    }
}
