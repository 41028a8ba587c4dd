//! Section splitting and numbered-list re-segmentation.
//!
//! A judgment is first divided into titled sections (主文, 事實及理由, ...),
//! then each section's page-layout lines are regrouped into top-level
//! enumerated blocks using the marker catalog.

mod catalog;
mod config;
mod numbered;
mod sections;

pub use catalog::{
    char_head, Boundary, EnumerationAlphabet, MarkerCatalog, MarkerHit, THIRD_VARIANTS,
};
pub use config::create_judicial_catalog;
pub use numbered::{flatten_text, Resegmenter};
pub use sections::{
    is_closing_date, is_party_designation, match_section_title, split_sections, strip_whitespace,
};
