//! Consistency checks on segmented judgments.
//!
//! Checks never reject a record; they only report what a reviewer should
//! look at.

use crate::types::{ArgumentRole, SectionName, SegmentedJudgment};

/// Key of the argument span map in persisted records.
pub const ARGUMENTS_KEY: &str = "事實及理由";

/// Payload reported when a judgment has neither arguments nor main holding.
pub const ALL_KEYS_EMPTY: &str = "all keys are empty";

/// Keys found empty or missing in one judgment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConsistencyReport {
    /// Present but empty top-level keys.
    pub empty_keys: Vec<&'static str>,
    /// Empty or missing argument spans.
    pub empty_arguments: Vec<&'static str>,
}

impl ConsistencyReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.empty_keys.is_empty() && self.empty_arguments.is_empty()
    }
}

/// Check a segmented judgment for empty keys and spans.
///
/// Argument spans are reported when the plaintiff's claim, the defendant's
/// response or the court's reasoning is empty, or when both the undisputed
/// facts and the disputed issues are.
#[must_use]
pub fn check(judgment: &SegmentedJudgment) -> ConsistencyReport {
    let holding = judgment.sections.get(SectionName::MainHolding);

    if judgment.arguments.is_none() && holding.is_none() {
        return ConsistencyReport {
            empty_keys: vec![SectionName::MainHolding.as_str(), ARGUMENTS_KEY],
            empty_arguments: vec![ALL_KEYS_EMPTY],
        };
    }

    let mut empty_keys = Vec::new();
    let metadata = [
        ("案由", &judgment.cause),
        ("年份", &judgment.year),
        ("字別", &judgment.case_type),
        ("標題", &judgment.title),
    ];
    empty_keys.extend(
        metadata
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(key, _)| *key),
    );
    if holding.is_some_and(|segment| segment.is_empty()) {
        empty_keys.push(SectionName::MainHolding.as_str());
    }
    if judgment.arguments.as_ref().is_some_and(|spans| spans.is_empty()) {
        empty_keys.push(ARGUMENTS_KEY);
    }
    if judgment.file_name.is_empty() {
        empty_keys.push("檔案名稱");
    }

    let empty_roles: Vec<ArgumentRole> = match &judgment.arguments {
        Some(spans) => ArgumentRole::ALL
            .into_iter()
            .filter(|role| spans.get(*role).is_empty())
            .collect(),
        None => ArgumentRole::ALL.to_vec(),
    };
    let is_empty = |role| empty_roles.contains(&role);
    let incomplete = is_empty(ArgumentRole::PlaintiffClaim)
        || is_empty(ArgumentRole::DefendantResponse)
        || is_empty(ArgumentRole::CourtReasoning)
        || (is_empty(ArgumentRole::UndisputedFacts) && is_empty(ArgumentRole::DisputedIssues));

    let empty_arguments = if incomplete {
        empty_roles.iter().map(ArgumentRole::key).collect()
    } else {
        Vec::new()
    };

    ConsistencyReport {
        empty_keys,
        empty_arguments,
    }
}
