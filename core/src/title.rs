//! Headline-style title casing.
//!
//! [`normalize_title`] runs a fixed, ordered pipeline of regex rewrites. The order
//! matters: each later pass may override what an earlier pass did to the same word.
//!
//! 1. Split the phrase into segments at sentence punctuation followed by a space, or
//!    at an opening quote. Delimiters are kept verbatim.
//! 2. Per segment:
//!    - capitalize every plain word (dotted abbreviations such as `e.g` are skipped)
//!    - lowercase small words (`a`, `of`, `the`, `vs.`, ...)
//!    - capitalize a small word that opens or closes the segment
//!    - uppercase standalone dotted initialisms (`u.s` -> `U.S`); a dotted run
//!      glued to a longer token (`file.a.b`) is left alone
//! 3. Rejoin, then apply whole-string fixups: `v.`/`vs.` between words, possessive
//!    `'s`, and ampersand idioms (`AT&T`, `Q&A`).
//!
//! The small-word list and punctuation set follow the classic headline-casing
//! convention and must not drift: any change alters printed card text.
//!
//! Word boundaries are ASCII-only (`(?-u:\b)`): a non-ASCII letter ends a word,
//! so `café` is cased like `caf` + `é`.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Function words kept lowercase inside a title.
const SMALL_WORDS: &str = r"(a|an|and|as|at|but|by|en|for|if|in|of|on|or|the|to|v[.]?|via|vs[.]?)";

/// ASCII punctuation allowed before an opening, or after a closing, small word.
const PUNCT: &str = r##"([!"#$%&'()*+,./:;<=>?@\[\\\]^_`{|}~-]*)"##;

/// ASCII word boundary.
const BOUNDARY: &str = r"(?-u:\b)";

static TITLE_RULES: OnceLock<TitleRules> = OnceLock::new();

fn title_rules() -> &'static TitleRules {
    TITLE_RULES.get_or_init(TitleRules::new)
}

/// Convert a phrase to headline-style title case.
///
/// Total and idempotent: every input, including the empty string, has a defined
/// output, and normalizing the output again changes nothing.
///
/// ```
/// use phrasewheel_core::normalize_title;
///
/// assert_eq!(normalize_title("the lord of the rings"), "The Lord of the Rings");
/// assert_eq!(normalize_title("u.s. v. smith"), "U.S. v. Smith");
/// ```
#[must_use]
pub fn normalize_title(phrase: &str) -> String {
    let rules = title_rules();

    let mut joined = String::with_capacity(phrase.len());
    let mut start = 0;
    for delimiter in rules.segment_break.find_iter(phrase) {
        joined.push_str(&rules.title_case_segment(&phrase[start..delimiter.start()]));
        joined.push_str(delimiter.as_str());
        start = delimiter.end();
    }
    joined.push_str(&rules.title_case_segment(&phrase[start..]));

    rules.fix_up(&joined)
}

/// Uppercase the first character, leave the rest as written.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug)]
struct TitleRules {
    // Segmentation
    segment_break: Regex,

    // Per-segment passes, in application order
    word: Regex,
    dotted: Regex,
    small_word: Regex,
    leading_small_word: Regex,
    trailing_small_word: Regex,
    initialism: Regex,

    // Whole-title fixups
    versus: Regex,
    possessive: Regex,
    ampersand_idiom: Regex,
}

impl TitleRules {
    fn new() -> Self {
        Self {
            // `[:.;?!]` + space, or a straight / left smart quote opening a quotation.
            segment_break: Regex::new(r#"[:.;?!] |(?: |^)["\x{201C}]"#)
                .expect("valid segment break regex"),

            // Letters, then lowercase letters, periods and (smart) apostrophes.
            word: Regex::new(&format!(r"{BOUNDARY}[A-Za-z][a-z.'\x{{2019}}]*{BOUNDARY}"))
                .expect("valid word regex"),
            dotted: Regex::new(r"[A-Za-z]\.[A-Za-z]").expect("valid dotted abbreviation regex"),
            small_word: Regex::new(&format!(r"(?i){BOUNDARY}{SMALL_WORDS}{BOUNDARY}"))
                .expect("valid small word regex"),
            leading_small_word: Regex::new(&format!(r"(?i)^{PUNCT}{SMALL_WORDS}{BOUNDARY}"))
                .expect("valid leading small word regex"),
            trailing_small_word: Regex::new(&format!(r"(?i){BOUNDARY}{SMALL_WORDS}{PUNCT}$"))
                .expect("valid trailing small word regex"),
            // Whole token only: the run must not continue a word, number or dotted name.
            initialism: Regex::new(&format!(
                r"(^|[^A-Za-z0-9.'\x{{2019}}])([A-Za-z](?:\.[A-Za-z])+){BOUNDARY}"
            ))
            .expect("valid initialism regex"),

            versus: Regex::new(r"(?i) V(s?)\. ").expect("valid versus regex"),
            possessive: Regex::new(&format!(r"(?i)(['\x{{2019}}])S{BOUNDARY}"))
                .expect("valid possessive regex"),
            ampersand_idiom: Regex::new(&format!(r"(?i){BOUNDARY}(?:AT&T|Q&A){BOUNDARY}"))
                .expect("valid ampersand idiom regex"),
        }
    }

    fn title_case_segment(&self, segment: &str) -> String {
        let cased = self.word.replace_all(segment, |caps: &Captures| {
            let word = &caps[0];
            if self.dotted.is_match(word) {
                word.to_string()
            } else {
                capitalize(word)
            }
        });
        let cased = self
            .small_word
            .replace_all(&cased, |caps: &Captures| caps[0].to_lowercase());
        let cased = self
            .leading_small_word
            .replace_all(&cased, |caps: &Captures| {
                format!("{}{}", &caps[1], capitalize(&caps[2]))
            });
        let cased = self
            .trailing_small_word
            .replace_all(&cased, |caps: &Captures| capitalize(&caps[0]));
        self.initialism
            .replace_all(&cased, |caps: &Captures| {
                format!("{}{}", &caps[1], caps[2].to_uppercase())
            })
            .into_owned()
    }

    fn fix_up(&self, title: &str) -> String {
        let fixed = self.versus.replace_all(title, " v${1}. ");
        let fixed = self.possessive.replace_all(&fixed, "${1}s");
        self.ampersand_idiom
            .replace_all(&fixed, |caps: &Captures| caps[0].to_uppercase())
            .into_owned()
    }
}
