//! Numbered-list re-segmentation.
//!
//! Line breaks in judgments come from page layout, not from sentence
//! structure, so lines are joined and regrouped by enumeration marker.

use super::catalog::{Boundary, MarkerCatalog, MarkerHit};
use super::sections::strip_whitespace;
use crate::types::{NumberedSegment, SectionMap, SectionSegments, SegmentedJudgment};

/// Ends a sentence in unnumbered text.
const SENTENCE_END: char = '。';

/// Regroups section lines into top-level numbered blocks.
pub struct Resegmenter<'a> {
    catalog: &'a MarkerCatalog,
}

/// The top-level marker a section is numbered with.
struct TopLevel {
    hit: MarkerHit,
    next: Option<Boundary>,
}

impl<'a> Resegmenter<'a> {
    /// Create a new re-segmenter over a marker catalog.
    #[must_use]
    pub fn new(catalog: &'a MarkerCatalog) -> Self {
        Self { catalog }
    }

    /// Regroup one section's lines.
    ///
    /// The first line that starts with a catalog marker locks the section's
    /// top-level alphabet; text before it joins the first block, one chunk
    /// per full-stop-terminated sentence. After the
    /// lock, a line starting with the next top-level marker opens a new
    /// block, and a line starting with any other marker starts a new chunk
    /// within the current block.
    #[must_use]
    pub fn resegment(&self, lines: &[String]) -> NumberedSegment {
        let mut segment = NumberedSegment::new();
        let mut index = 1;
        let mut current = String::new();
        let mut top: Option<TopLevel> = None;

        for line in lines {
            let text = strip_whitespace(line);

            let Some(level) = top.as_mut() else {
                if let Some(hit) = self.catalog.locate_prefix(&text) {
                    top = Some(self.top_level(hit));
                }
                current.push_str(&text);
                // Unnumbered sentences stay separate until the first marker
                if top.is_none() && text.ends_with(SENTENCE_END) {
                    segment.push(index, std::mem::take(&mut current));
                }
                continue;
            };

            if let Some(boundary) = level.next.filter(|b| b.opens(&text)) {
                segment.push(index, std::mem::take(&mut current));
                index += 1;
                level.hit.position = boundary.position;
                level.next = self.catalog.boundary_after(level.hit);
                current = text;
            } else if self.catalog.starts_with_any(&text) {
                segment.push(index, std::mem::take(&mut current));
                current = text;
            } else {
                current.push_str(&text);
            }
        }

        if !current.is_empty() {
            segment.push(index, current);
        }

        segment
    }

    /// Re-segment every section of a split judgment.
    ///
    /// The title is flattened to a whitespace-free string.
    #[must_use]
    pub fn segment_map(&self, map: &SectionMap, file_name: impl Into<String>) -> SegmentedJudgment {
        let mut sections = SectionSegments::new();
        for section in &map.sections {
            sections.insert(section.name, self.resegment(&section.lines));
        }

        SegmentedJudgment {
            cause: strip_whitespace(&map.cause),
            year: strip_whitespace(&map.year),
            case_type: strip_whitespace(&map.case_type),
            title: strip_whitespace(&map.title),
            sections,
            arguments: None,
            file_name: file_name.into(),
        }
    }

    fn top_level(&self, hit: MarkerHit) -> TopLevel {
        TopLevel {
            hit,
            next: self.catalog.boundary_after(hit),
        }
    }
}

/// Join lines into one whitespace-free string.
#[must_use]
pub fn flatten_text(lines: &[String]) -> String {
    lines.iter().map(|line| strip_whitespace(line)).collect()
}
