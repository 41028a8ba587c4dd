//! Argument extraction.
//!
//! Finds the plaintiff's claim, the defendant's response, the undisputed
//! facts, the court's reasoning and the disputed issues in a re-segmented
//! facts section. Each span is located by pattern and bounded by the next
//! marker of the enumeration it opened with; empty spans escalate through
//! looser fallback searches.

mod capture;
mod engine;
mod patterns;

pub use capture::{capture, Capture};
pub use engine::{ArgumentExtractor, ExtractionLog, TitleAnomaly};
pub use patterns::{DisputedIssueMatcher, PatternSet, SpanMatcher};
