//! Span capture over a flattened chunk sequence.
//!
//! A span opens at the first chunk matching its pattern. The enumeration
//! marker at the head of that chunk tells where the span ends: capture
//! continues until a chunk carries the marker that follows it.

use super::patterns::SpanMatcher;
use crate::config::{BOUNDARY_HEAD, NOTATION_HEAD_LONG, NOTATION_HEAD_SHORT};
use crate::splitting::{char_head, Boundary, MarkerCatalog};

/// Result of one capture attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Capture {
    /// Captured chunks, in order.
    pub chunks: Vec<String>,
    /// False when a chunk matched but no usable marker was found at its head.
    pub marker_located: bool,
}

impl Capture {
    /// A span whose opening chunk had no locatable marker.
    #[must_use]
    pub fn marker_not_found() -> Self {
        Self {
            chunks: Vec::new(),
            marker_located: false,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Whether a fallback attempt should follow this one.
    ///
    /// Only empty captures that did not fail on the marker escalate.
    #[must_use]
    pub fn should_escalate(&self) -> bool {
        self.chunks.is_empty() && self.marker_located
    }
}

enum State {
    Searching,
    Capturing(Boundary),
}

/// Capture the span opened by the first chunk matching `matcher`.
///
/// The marker is looked up in the first 10 characters of the opening chunk,
/// then in the first 50. A marker without a successor in its alphabet counts
/// as not found, and the span is dropped.
pub fn capture(catalog: &MarkerCatalog, matcher: &dyn SpanMatcher, chunks: &[String]) -> Capture {
    let mut captured = Vec::new();
    let mut state = State::Searching;

    for chunk in chunks {
        match state {
            State::Searching => {
                if !matcher.matches(chunk) {
                    continue;
                }
                let Some(boundary) = locate_boundary(catalog, chunk) else {
                    // Deliberately drops the opening chunk too; see decision 4 in DESIGN.md
                    return Capture::marker_not_found();
                };
                captured.push(chunk.clone());
                state = State::Capturing(boundary);
            }
            State::Capturing(boundary) => {
                if boundary.found_in(char_head(chunk, BOUNDARY_HEAD)) {
                    break;
                }
                captured.push(chunk.clone());
            }
        }
    }

    Capture {
        chunks: captured,
        marker_located: true,
    }
}

fn locate_boundary(catalog: &MarkerCatalog, chunk: &str) -> Option<Boundary> {
    [NOTATION_HEAD_SHORT, NOTATION_HEAD_LONG]
        .into_iter()
        .find_map(|width| {
            let hit = catalog.find_in_head(chunk, width)?;
            catalog.boundary_after(hit)
        })
}
