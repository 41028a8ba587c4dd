//! Marker alphabets used in Taiwanese court judgments.

use super::catalog::{EnumerationAlphabet, MarkerCatalog};

const HEAVENLY_STEMS: &[&str] = &[
    "甲、", "乙、", "丙、", "丁、", "戊、", "己、", "庚、", "辛、", "壬、", "奎、",
];

// 參、 has three variant spellings that follow it directly.
const FORMAL_NUMERALS: &[&str] = &[
    "壹、", "貳、", "參、", "叄、", "叁、", "参、", "肆、", "伍、", "陸、", "柒、", "捌、", "玖、", "拾、",
];

const CHINESE_NUMERALS: &[&str] = &[
    "一、", "二、", "三、", "四、", "五、", "六、", "七、", "八、", "九、", "十、",
    "十一、", "十二、", "十三、", "十四、", "十五、", "十六、", "十七、", "十八、", "十九、", "二十、",
];

const HALF_WIDTH_PARENTHESIZED: &[&str] = &[
    "(一)", "(二)", "(三)", "(四)", "(五)", "(六)", "(七)", "(八)", "(九)", "(十)",
    "(十一)", "(十二)", "(十三)", "(十四)", "(十五)", "(十六)", "(十七)", "(十八)", "(十九)", "(二十)",
];

const FULL_WIDTH_PARENTHESIZED: &[&str] = &[
    "（一）", "（二）", "（三）", "（四）", "（五）", "（六）", "（七）", "（八）", "（九）", "（十）",
    "（十一）", "（十二）", "（十三）", "（十四）", "（十五）", "（十六）", "（十七）", "（十八）", "（十九）", "（二十）",
];

const PARENTHESIZED_IDEOGRAPHS: &[&str] = &["㈠", "㈡", "㈢", "㈣", "㈤", "㈥", "㈦", "㈧", "㈨", "㈩"];

const ARABIC_PERIOD: &[&str] = &[
    "1.", "2.", "3.", "4.", "5.", "6.", "7.", "8.", "9.", "10.",
    "11.", "12.", "13.", "14.", "15.", "16.", "17.", "18.", "19.", "20.",
];

const LATIN_PERIOD: &[&str] = &["A.", "B.", "C.", "D.", "E.", "F.", "G.", "H.", "I.", "J.", "K."];

const CIRCLED_IDEOGRAPHS: &[&str] = &["㊀", "㊁", "㊂", "㊃", "㊄", "㊅", "㊆", "㊇", "㊈", "㊉"];

const CIRCLED_DIGITS: &[&str] = &[
    "①", "②", "③", "④", "⑤", "⑥", "⑦", "⑧", "⑨", "⑩",
    "⑪", "⑫", "⑬", "⑭", "⑮", "⑯", "⑰", "⑱", "⑲", "⑳",
];

const PARENTHESIZED_DIGITS: &[&str] = &[
    "⑴", "⑵", "⑶", "⑷", "⑸", "⑹", "⑺", "⑻", "⑼", "⑽",
    "⑾", "⑿", "⒀", "⒁", "⒂", "⒃", "⒄", "⒅", "⒆", "⒇",
];

const NEGATIVE_CIRCLED_DIGITS: &[&str] = &[
    "❶", "❷", "❸", "❹", "❺", "❻", "❼", "❽", "❾", "❿",
    "⓫", "⓬", "⓭", "⓮", "⓯", "⓰", "⓱", "⓲", "⓳", "⓴",
];

const DIGIT_FULL_STOP: &[&str] = &[
    "⒈", "⒉", "⒊", "⒋", "⒌", "⒍", "⒎", "⒏", "⒐", "⒑",
    "⒒", "⒓", "⒔", "⒕", "⒖", "⒗", "⒘", "⒙", "⒚", "⒛",
];

const DOUBLE_CIRCLED_DIGITS: &[&str] = &["⓵", "⓶", "⓷", "⓸", "⓹", "⓺", "⓻", "⓼", "⓽", "⓾"];

const ROMAN_NUMERALS: &[&str] = &["Ⅰ", "Ⅱ", "Ⅲ", "Ⅳ", "Ⅴ", "Ⅵ", "Ⅶ", "Ⅷ", "Ⅸ", "Ⅹ"];

/// Create the marker catalog for Taiwanese judgments.
///
/// Priority follows how judgments nest their outline, outermost first:
///
/// ```text
/// 甲、
/// └── 壹、
///     └── 一、
///         └── (一) / （一）
///             └── ㈠ / 1. / A. / ㊀ / ① / ⑴ / ❶ / ⒈ / ⓵ / Ⅰ
/// ```
#[must_use]
pub fn create_judicial_catalog() -> MarkerCatalog {
    let mut catalog = MarkerCatalog::new();

    catalog.register(EnumerationAlphabet::new("heavenly-stems", HEAVENLY_STEMS));
    catalog.register(EnumerationAlphabet::new("formal-numerals", FORMAL_NUMERALS));
    catalog.register(EnumerationAlphabet::new("chinese-numerals", CHINESE_NUMERALS));
    catalog.register(EnumerationAlphabet::new(
        "half-width-parenthesized",
        HALF_WIDTH_PARENTHESIZED,
    ));
    catalog.register(EnumerationAlphabet::new(
        "full-width-parenthesized",
        FULL_WIDTH_PARENTHESIZED,
    ));
    catalog.register(EnumerationAlphabet::new(
        "parenthesized-ideographs",
        PARENTHESIZED_IDEOGRAPHS,
    ));
    catalog.register(EnumerationAlphabet::new("arabic-period", ARABIC_PERIOD));
    catalog.register(EnumerationAlphabet::new("latin-period", LATIN_PERIOD));
    catalog.register(EnumerationAlphabet::new("circled-ideographs", CIRCLED_IDEOGRAPHS));
    catalog.register(EnumerationAlphabet::new("circled-digits", CIRCLED_DIGITS));
    catalog.register(EnumerationAlphabet::new("parenthesized-digits", PARENTHESIZED_DIGITS));
    catalog.register(EnumerationAlphabet::new(
        "negative-circled-digits",
        NEGATIVE_CIRCLED_DIGITS,
    ));
    catalog.register(EnumerationAlphabet::new("digit-full-stop", DIGIT_FULL_STOP));
    catalog.register(EnumerationAlphabet::new(
        "double-circled-digits",
        DOUBLE_CIRCLED_DIGITS,
    ));
    catalog.register(EnumerationAlphabet::new("roman-numerals", ROMAN_NUMERALS));

    catalog
}
