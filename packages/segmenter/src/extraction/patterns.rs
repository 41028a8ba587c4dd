//! Patterns that locate the opening chunk of each argument span.

use regex::Regex;
use std::sync::LazyLock;

/// Trait for deciding whether a chunk opens a span.
pub trait SpanMatcher: Send + Sync {
    /// Whether `chunk` matches.
    fn matches(&self, chunk: &str) -> bool;
}

impl SpanMatcher for Regex {
    fn matches(&self, chunk: &str) -> bool {
        self.is_match(chunk)
    }
}

/// Characters allowed in a free-form party designation ("原告甲○○", ...).
macro_rules! party_name {
    () => {
        r"[\x{4e00}-\x{9fa5}○（）()、，0-9０-９]{1,50}"
    };
}

macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {
        #[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($pattern).expect("valid regex"));
    };
}

static_regex!(
    PLAINTIFF,
    r"(?:^|[、])\s*((?:本件)?(?:原告|被上訴人|上訴人)(?:等)?(?:起訴)?(?:主張|聲明|方面))"
);
static_regex!(
    DEFENDANT,
    r"(?:^|[、])\s*(((?:被告)(?:等)?(?:主張|部分|則以|聲明|答辯|抗辯|辯以|辯稱|方面))|(?:被上訴人|上訴人)(?:等)?(?:則以|答辯|抗辯|辯以)|(?:被上訴人)(?:等)?(?:方面))"
);
static_regex!(UNDISPUTED, r"不爭執(?:之)?(?:事項|事實|要旨|處)");
static_regex!(
    REASONING,
    r"(得心證(?:之|的)?理由|(?:法院|本院)(?:之|的)?(?:判斷|論斷|認定)|(?:茲)?分述(?:如下|之)?)"
);
static_regex!(
    PLAINTIFF_FALLBACK,
    concat!(
        r"(?:^|[、])\s*((?:",
        party_name!(),
        r")(?:起訴)?(?:主張|聲明)(?:略以)?[：:])"
    )
);
static_regex!(
    DEFENDANT_FALLBACK,
    concat!(
        r"(?:^|[、])\s*(((?:被告)(?:等)?(?:主張|部分|則以|聲明|答辯|抗辯|辯以|辯稱))|(?:",
        party_name!(),
        r")(?:則以|答辯|抗辯|辯以|辯稱)(?:略以)?[：:])"
    )
);
static_regex!(REASONING_LOOSE, r"(?:經查)[：:]");
static_regex!(WAIVER, r"(?:被告)?未於言詞辯論期日到場");

static_regex!(
    DUAL_PLAINTIFF,
    r"(?:^|[、])\s*((?:原告|上訴人)(?:等)?(?:起訴)?(?:方面|主張|聲明))"
);
static_regex!(
    DUAL_DEFENDANT,
    r"(?:^|[、])\s*(((?:被告)(?:等)?(?:方面|主張|部分|則以|聲明|答辯|抗辯|辯以|辯稱))|(?:被上訴人)(?:等)?(?:方面|則以|答辯|抗辯|辯以))"
);
static_regex!(
    DUAL_PLAINTIFF_FALLBACK,
    concat!(
        r"(?:^|[、])\s*((?:",
        party_name!(),
        r")(?:起訴)?(?:方面|主張|聲明)[：:])"
    )
);
static_regex!(
    DUAL_DEFENDANT_FALLBACK,
    concat!(
        r"(?:^|[、])\s*((?:",
        party_name!(),
        r")(?:則以|答辯|抗辯|辯以|辯稱)[：:])"
    )
);

static_regex!(DISPUTED_HEADING, r"爭執(?:之)?(?:事項|事實|要旨|處)");
static_regex!(UNDISPUTED_HEADING, r"不爭執(?:之)?事項");

/// Matches headings of the disputed issues ("爭執事項", "爭點").
///
/// A "爭執事項" heading only counts when it is not the tail of
/// "不爭執事項". A chunk mentioning "爭點" counts unless it also carries an
/// undisputed-facts heading.
pub struct DisputedIssueMatcher;

impl SpanMatcher for DisputedIssueMatcher {
    fn matches(&self, chunk: &str) -> bool {
        let disputed_heading = DISPUTED_HEADING
            .find_iter(chunk)
            .any(|m| !chunk[..m.start()].ends_with('不'));

        disputed_heading || (chunk.contains("爭點") && !UNDISPUTED_HEADING.is_match(chunk))
    }
}

static DISPUTED: DisputedIssueMatcher = DisputedIssueMatcher;

/// The matchers used for one extraction run.
#[derive(Clone, Copy)]
pub struct PatternSet {
    pub plaintiff: &'static dyn SpanMatcher,
    pub defendant: &'static dyn SpanMatcher,
    pub undisputed: &'static dyn SpanMatcher,
    pub reasoning: &'static dyn SpanMatcher,
    pub disputed: &'static dyn SpanMatcher,
    pub plaintiff_fallback: &'static dyn SpanMatcher,
    pub defendant_fallback: &'static dyn SpanMatcher,
    pub reasoning_loose: &'static dyn SpanMatcher,
    pub waiver: &'static dyn SpanMatcher,
}

impl PatternSet {
    /// Patterns for judgments with a combined facts-and-reasoning section.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            plaintiff: &*PLAINTIFF,
            defendant: &*DEFENDANT,
            undisputed: &*UNDISPUTED,
            reasoning: &*REASONING,
            disputed: &DISPUTED,
            plaintiff_fallback: &*PLAINTIFF_FALLBACK,
            defendant_fallback: &*DEFENDANT_FALLBACK,
            reasoning_loose: &*REASONING_LOOSE,
            waiver: &*WAIVER,
        }
    }

    /// Patterns for older judgments with separate 事實 and 理由 sections.
    ///
    /// These judgments introduce each party with "...方面".
    #[must_use]
    pub fn dual_layout() -> Self {
        Self {
            plaintiff: &*DUAL_PLAINTIFF,
            defendant: &*DUAL_DEFENDANT,
            plaintiff_fallback: &*DUAL_PLAINTIFF_FALLBACK,
            defendant_fallback: &*DUAL_DEFENDANT_FALLBACK,
            ..Self::standard()
        }
    }
}
