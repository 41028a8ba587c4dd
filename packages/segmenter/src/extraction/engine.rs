//! Argument extractor that turns a segmented judgment's facts section into
//! the five argument spans.

use super::capture::{capture, Capture};
use super::patterns::{PatternSet, SpanMatcher};
use crate::config::WAIVER_CHUNK;
use crate::splitting::MarkerCatalog;
use crate::types::{ArgumentRole, ArgumentSpans, SectionName, SegmentedJudgment};

/// Why the extractor had to deviate from the usual facts section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleAnomaly {
    /// More than two facts/reasoning sections; record left unsegmented.
    MultipleFactSections,
    /// No facts/reasoning section; arguments taken from the main holding.
    FromMainHolding,
    /// Neither facts/reasoning nor main holding; record left unsegmented.
    MissingSections,
}

impl TitleAnomaly {
    /// Message written to the title log.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::MultipleFactSections => "有多個事實或理由",
            Self::FromMainHolding => "無事實或理由，從主文get",
            Self::MissingSections => "無事實或理由及主文",
        }
    }
}

/// Per-judgment findings of one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionLog {
    pub title: Option<TitleAnomaly>,
    /// A span's opening chunk had no locatable marker.
    pub notation: bool,
    /// Roles that needed a fallback search, in order of escalation.
    pub second_search: Vec<ArgumentRole>,
    /// The defendant's absence from the hearing stood in for a response.
    pub waiver: bool,
}

impl ExtractionLog {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.title.is_none() && !self.notation && self.second_search.is_empty() && !self.waiver
    }
}

/// Which section a capture runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    /// The section chosen for extraction.
    Working,
    /// The separate 理由 section of the dual layout.
    Reasoning,
}

/// A fallback taken after an empty capture.
#[derive(Clone, Copy)]
enum Attempt {
    /// Capture again with another pattern.
    Capture {
        matcher: &'static dyn SpanMatcher,
        source: Source,
        escalation: bool,
    },
    /// Replace the span with the synthetic waiver chunk when the defendant
    /// did not appear.
    Waiver(&'static dyn SpanMatcher),
    /// Take the whole section as the span.
    WholeSection(Source),
}

/// The section layout chosen for one judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Single(SectionName),
    /// Older judgments with separate 事實 and 理由 sections.
    Dual,
}

impl Layout {
    fn working(self) -> SectionName {
        match self {
            Self::Single(name) => name,
            Self::Dual => SectionName::Facts,
        }
    }
}

/// Extracts argument spans using layered pattern search.
pub struct ArgumentExtractor<'a> {
    catalog: &'a MarkerCatalog,
    standard: PatternSet,
    dual: PatternSet,
}

impl<'a> ArgumentExtractor<'a> {
    /// Create a new extractor with the built-in pattern sets.
    #[must_use]
    pub fn new(catalog: &'a MarkerCatalog) -> Self {
        Self {
            catalog,
            standard: PatternSet::standard(),
            dual: PatternSet::dual_layout(),
        }
    }

    /// Extract argument spans into `judgment`.
    ///
    /// On success the consumed facts section is replaced by the `事實及理由`
    /// span map. Structural anomalies leave the record unsegmented and are
    /// reported in the returned log.
    pub fn extract(&self, jid: &str, judgment: &mut SegmentedJudgment) -> ExtractionLog {
        let mut log = ExtractionLog::default();

        let layout = match select_layout(judgment) {
            Ok((layout, anomaly)) => {
                log.title = anomaly;
                layout
            }
            Err(anomaly) => {
                tracing::debug!(jid = %jid, anomaly = anomaly.message(), "Leaving judgment unsegmented");
                log.title = Some(anomaly);
                return log;
            }
        };

        let working = flattened(judgment, layout.working());
        let reasoning = match layout {
            Layout::Dual => flattened(judgment, SectionName::Reasoning),
            Layout::Single(_) => Vec::new(),
        };
        let patterns = match layout {
            Layout::Dual => &self.dual,
            Layout::Single(_) => &self.standard,
        };

        let mut spans = ArgumentSpans::default();
        for role in ArgumentRole::ALL {
            let chunks = self.extract_role(role, layout, patterns, &working, &reasoning, &mut log);
            spans.set(role, chunks);
        }

        // Some judgments merge their reasoning into the disputed issues, so
        // the loose retry waits until disputed issues have been searched.
        if spans.court_reasoning.is_empty() && spans.disputed_issues.is_empty() && !log.notation {
            let loose = capture(self.catalog, patterns.reasoning_loose, &working);
            spans.set(ArgumentRole::CourtReasoning, loose.chunks);
        }

        match layout {
            Layout::Dual => {
                judgment.sections.remove(SectionName::Facts);
                judgment.sections.remove(SectionName::Reasoning);
            }
            Layout::Single(SectionName::MainHolding) => {}
            Layout::Single(name) => {
                judgment.sections.remove(name);
            }
        }
        judgment.arguments = Some(spans);

        tracing::debug!(
            jid = %jid,
            notation = log.notation,
            second_search = ?log.second_search,
            waiver = log.waiver,
            "Extracted arguments"
        );

        log
    }

    fn extract_role(
        &self,
        role: ArgumentRole,
        layout: Layout,
        patterns: &PatternSet,
        working: &[String],
        reasoning: &[String],
        log: &mut ExtractionLog,
    ) -> Vec<String> {
        let mut last = capture(self.catalog, primary(role, patterns), working);
        if !last.marker_located {
            log.notation = true;
        }

        for attempt in fallbacks(role, layout, patterns) {
            if !last.should_escalate() {
                break;
            }

            let section = |from: Source| match from {
                Source::Working => working,
                Source::Reasoning => reasoning,
            };

            last = match attempt {
                Attempt::Capture {
                    matcher,
                    source: from,
                    escalation,
                } => {
                    if escalation {
                        log.second_search.push(role);
                    }
                    capture(self.catalog, matcher, section(from))
                }
                Attempt::Waiver(matcher) => {
                    let found = capture(self.catalog, matcher, working);
                    if found.is_empty() {
                        found
                    } else {
                        log.waiver = true;
                        Capture {
                            chunks: vec![WAIVER_CHUNK.to_string()],
                            marker_located: true,
                        }
                    }
                }
                Attempt::WholeSection(from) => {
                    log.second_search.push(role);
                    Capture {
                        chunks: section(from).to_vec(),
                        marker_located: true,
                    }
                }
            };
        }

        last.chunks
    }
}

fn primary(role: ArgumentRole, patterns: &PatternSet) -> &'static dyn SpanMatcher {
    match role {
        ArgumentRole::PlaintiffClaim => patterns.plaintiff,
        ArgumentRole::DefendantResponse => patterns.defendant,
        ArgumentRole::UndisputedFacts => patterns.undisputed,
        ArgumentRole::CourtReasoning => patterns.reasoning,
        ArgumentRole::DisputedIssues => patterns.disputed,
    }
}

/// Fallbacks for a role, in the order they are tried.
fn fallbacks(role: ArgumentRole, layout: Layout, patterns: &PatternSet) -> Vec<Attempt> {
    match role {
        ArgumentRole::PlaintiffClaim => vec![Attempt::Capture {
            matcher: patterns.plaintiff_fallback,
            source: Source::Working,
            escalation: true,
        }],
        ArgumentRole::DefendantResponse => vec![
            Attempt::Capture {
                matcher: patterns.defendant_fallback,
                source: Source::Working,
                escalation: true,
            },
            Attempt::Waiver(patterns.waiver),
        ],
        ArgumentRole::CourtReasoning if layout == Layout::Dual => vec![
            Attempt::Capture {
                matcher: patterns.reasoning,
                source: Source::Reasoning,
                escalation: false,
            },
            Attempt::WholeSection(Source::Reasoning),
        ],
        _ => Vec::new(),
    }
}

/// Choose the section to extract from.
///
/// Returns the anomaly when the record has to be left unsegmented.
fn select_layout(
    judgment: &SegmentedJudgment,
) -> Result<(Layout, Option<TitleAnomaly>), TitleAnomaly> {
    let present: Vec<SectionName> = SectionName::ARGUMENT_SOURCES
        .into_iter()
        .filter(|name| judgment.sections.contains(*name))
        .collect();

    match present.as_slice() {
        [_, _, _, ..] => Err(TitleAnomaly::MultipleFactSections),
        [SectionName::Facts, SectionName::Reasoning] => Ok((Layout::Dual, None)),
        [first, ..] => Ok((Layout::Single(*first), None)),
        [] if judgment.sections.contains(SectionName::MainHolding) => Ok((
            Layout::Single(SectionName::MainHolding),
            Some(TitleAnomaly::FromMainHolding),
        )),
        [] => Err(TitleAnomaly::MissingSections),
    }
}

fn flattened(judgment: &SegmentedJudgment, name: SectionName) -> Vec<String> {
    judgment
        .sections
        .get(name)
        .map(|segment| segment.flatten())
        .unwrap_or_default()
}
