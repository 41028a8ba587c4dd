//! Enumeration marker catalog.
//!
//! Judgments number their points with many different marker alphabets
//! (一、 / （一） / ① / 1. ...). The catalog keeps them in a fixed priority
//! order; the first alphabet that matches a line wins.

/// An ordered alphabet of enumeration markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationAlphabet {
    name: &'static str,
    markers: &'static [&'static str],
}

impl EnumerationAlphabet {
    /// Create a new alphabet.
    #[must_use]
    pub const fn new(name: &'static str, markers: &'static [&'static str]) -> Self {
        Self { name, markers }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn markers(&self) -> &'static [&'static str] {
        self.markers
    }

    /// Marker at `position`.
    #[must_use]
    pub fn marker(&self, position: usize) -> Option<&'static str> {
        self.markers.get(position).copied()
    }

    /// Marker following the one at `position`, `None` for the last marker.
    #[must_use]
    pub fn successor(&self, position: usize) -> Option<&'static str> {
        self.marker(position + 1)
    }

    /// Position of the first marker that prefixes `text`.
    #[must_use]
    pub fn prefix_of(&self, text: &str) -> Option<usize> {
        self.markers.iter().position(|m| text.starts_with(m))
    }

    /// Position of the first marker contained in `text`.
    #[must_use]
    pub fn contained_in(&self, text: &str) -> Option<usize> {
        self.markers.iter().position(|m| text.contains(m))
    }
}

/// A marker located in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerHit {
    /// Index of the alphabet in catalog priority order.
    pub alphabet: usize,
    /// Position of the marker within the alphabet.
    pub position: usize,
}

/// The marker that closes the current item.
///
/// Usually a single marker; the formal numeral "third" is written four
/// different ways, and any of them closes the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    /// Position of the closing marker within its alphabet.
    pub position: usize,
    /// Textual forms that count as the closing marker.
    pub forms: &'static [&'static str],
}

impl Boundary {
    /// Whether any form of the closing marker occurs in `text`.
    #[must_use]
    pub fn found_in(&self, text: &str) -> bool {
        self.forms.iter().any(|form| text.contains(form))
    }

    /// Whether `text` starts with any form of the closing marker.
    #[must_use]
    pub fn opens(&self, text: &str) -> bool {
        self.forms.iter().any(|form| text.starts_with(form))
    }
}

/// Variant spellings of the formal numeral "third".
pub const THIRD_VARIANTS: &[&str] = &["參、", "参、", "叁、", "叄、"];

/// Ordered, append-only registry of enumeration alphabets.
#[derive(Debug, Clone, Default)]
pub struct MarkerCatalog {
    alphabets: Vec<EnumerationAlphabet>,
}

impl MarkerCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alphabets: Vec::new(),
        }
    }

    /// Append an alphabet with the lowest priority so far.
    pub fn register(&mut self, alphabet: EnumerationAlphabet) {
        self.alphabets.push(alphabet);
    }

    /// Alphabets in priority order.
    #[must_use]
    pub fn alphabets(&self) -> &[EnumerationAlphabet] {
        &self.alphabets
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&EnumerationAlphabet> {
        self.alphabets.get(index)
    }

    /// Marker text of a hit.
    #[must_use]
    pub fn marker(&self, hit: MarkerHit) -> Option<&'static str> {
        self.get(hit.alphabet)?.marker(hit.position)
    }

    /// Find the highest-priority alphabet with a marker prefixing `text`.
    #[must_use]
    pub fn locate_prefix(&self, text: &str) -> Option<MarkerHit> {
        self.alphabets
            .iter()
            .enumerate()
            .find_map(|(alphabet, a)| {
                a.prefix_of(text)
                    .map(|position| MarkerHit { alphabet, position })
            })
    }

    /// Whether `text` starts with a marker from any alphabet.
    #[must_use]
    pub fn starts_with_any(&self, text: &str) -> bool {
        self.locate_prefix(text).is_some()
    }

    /// Find a marker anywhere in the first `width` characters of `text`.
    ///
    /// Alphabets are tried in priority order and markers in alphabet order;
    /// the first marker contained in the head wins.
    #[must_use]
    pub fn find_in_head(&self, text: &str, width: usize) -> Option<MarkerHit> {
        let head = char_head(text, width);
        self.alphabets
            .iter()
            .enumerate()
            .find_map(|(alphabet, a)| {
                a.contained_in(head)
                    .map(|position| MarkerHit { alphabet, position })
            })
    }

    /// The boundary that closes the item opened by `hit`.
    ///
    /// Returns `None` when `hit` is the last marker of its alphabet. Variant
    /// spellings of the formal "third" are treated as one marker: a third
    /// closes with 肆、, and 貳、 closes with any spelling of the third.
    #[must_use]
    pub fn boundary_after(&self, hit: MarkerHit) -> Option<Boundary> {
        let alphabet = self.get(hit.alphabet)?;
        let current = alphabet.marker(hit.position)?;

        let mut position = hit.position + 1;
        if THIRD_VARIANTS.contains(&current) {
            while alphabet
                .marker(position)
                .is_some_and(|m| THIRD_VARIANTS.contains(&m))
            {
                position += 1;
            }
        }

        let next = alphabet.markers().get(position..=position)?;
        let forms = if next.iter().any(|m| THIRD_VARIANTS.contains(m)) {
            THIRD_VARIANTS
        } else {
            next
        };
        Some(Boundary { position, forms })
    }
}

/// The first `width` characters of `text`.
#[must_use]
pub fn char_head(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitting::create_judicial_catalog;

    #[test]
    fn test_successor_follows_alphabet_order() {
        let catalog = create_judicial_catalog();
        for alphabet in catalog.alphabets() {
            let markers = alphabet.markers();
            for i in 0..markers.len() - 1 {
                assert_eq!(alphabet.successor(i), Some(markers[i + 1]), "{}", alphabet.name());
            }
            assert_eq!(alphabet.successor(markers.len() - 1), None, "{}", alphabet.name());
        }
    }

    #[test]
    fn test_register_appends_in_priority_order() {
        let mut catalog = MarkerCatalog::new();
        catalog.register(EnumerationAlphabet::new("first", &["A"]));
        catalog.register(EnumerationAlphabet::new("second", &["A", "B"]));

        let hit = catalog.locate_prefix("A text").unwrap();
        assert_eq!(hit.alphabet, 0);
        assert_eq!(catalog.get(1).map(EnumerationAlphabet::name), Some("second"));
    }

    #[test]
    fn test_locate_prefix_priority() {
        let catalog = create_judicial_catalog();

        let hit = catalog.locate_prefix("一、原告主張").unwrap();
        assert_eq!(catalog.get(hit.alphabet).unwrap().name(), "chinese-numerals");
        assert_eq!(hit.position, 0);

        let hit = catalog.locate_prefix("（二）被告辯稱").unwrap();
        assert_eq!(catalog.get(hit.alphabet).unwrap().name(), "full-width-parenthesized");
        assert_eq!(hit.position, 1);

        let hit = catalog.locate_prefix("十一、本院之判斷").unwrap();
        assert_eq!(catalog.marker(hit), Some("十一、"));

        assert!(catalog.locate_prefix("原告主張").is_none());
    }

    #[test]
    fn test_starts_with_any() {
        let catalog = create_judicial_catalog();
        assert!(catalog.starts_with_any("⑴工資"));
        assert!(catalog.starts_with_any("Ⅲ結論"));
        assert!(!catalog.starts_with_any("工資⑴"));
    }

    #[test]
    fn test_find_in_head_width() {
        let catalog = create_judicial_catalog();
        let text = "原告起訴主張略以被告應給付新臺幣（一）";

        // The marker sits after the first ten characters
        assert!(catalog.find_in_head(text, 10).is_none());

        let hit = catalog.find_in_head(text, 50).unwrap();
        assert_eq!(catalog.marker(hit), Some("（一）"));
    }

    #[test]
    fn test_find_in_head_prefers_alphabet_priority() {
        let catalog = create_judicial_catalog();
        // Both "（一）" and "二、" occur; chinese-numerals has priority
        let hit = catalog.find_in_head("（一）二、", 10).unwrap();
        assert_eq!(catalog.marker(hit), Some("二、"));
    }

    #[test]
    fn test_boundary_after_simple() {
        let catalog = create_judicial_catalog();
        let hit = catalog.locate_prefix("一、原告主張").unwrap();
        let boundary = catalog.boundary_after(hit).unwrap();
        assert_eq!(boundary.forms, ["二、"]);
        assert!(boundary.found_in("xx二、被告"));
        assert!(!boundary.found_in("（二）被告"));
    }

    #[test]
    fn test_boundary_after_last_marker_is_none() {
        let catalog = create_judicial_catalog();
        let hit = catalog.locate_prefix("Ⅹ結論").unwrap();
        assert!(catalog.boundary_after(hit).is_none());
    }

    #[test]
    fn test_boundary_after_second_matches_any_third() {
        let catalog = create_judicial_catalog();
        let hit = catalog.locate_prefix("貳、被告方面").unwrap();
        let boundary = catalog.boundary_after(hit).unwrap();
        for variant in THIRD_VARIANTS {
            assert!(boundary.found_in(&format!("{variant}本院之判斷")));
        }
    }

    #[test]
    fn test_boundary_after_third_skips_variants() {
        let catalog = create_judicial_catalog();
        let hit = catalog.locate_prefix("叁、不爭執事項").unwrap();
        let boundary = catalog.boundary_after(hit).unwrap();
        assert_eq!(boundary.forms, ["肆、"]);
    }

    #[test]
    fn test_char_head_counts_characters() {
        assert_eq!(char_head("一二三四", 2), "一二");
        assert_eq!(char_head("一二", 10), "一二");
        assert_eq!(char_head("", 3), "");
    }
}
