//! Text canonicalization for OCR-tolerant matching
//!
//! Every matcher in the rule set runs over the normalized form: OCR output
//! varies in accents, case, spacing and punctuation, while the phrases we
//! look for do not.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Canonical matching form: NFKD with combining marks stripped (accent
/// removal), lower-cased, no-break spaces folded to spaces, whitespace runs
/// collapsed to one space, trimmed.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let stripped: String = text.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    let lowered = stripped.to_lowercase();
    let spaced = lowered.replace('\u{a0}', " ");
    WHITESPACE_RUN.replace_all(&spaced, " ").trim().to_string()
}

/// Decimal-separator folding applied on top of [`normalize`] before
/// matching fixed amounts like "reste a payer 0,00": commas become dots so
/// one pattern covers both separator conventions.
pub fn fold_decimal_separators(text: &str) -> String {
    let folded = text.replace('\u{a0}', " ").replace(',', ".");
    WHITESPACE_RUN.replace_all(&folded, " ").trim().to_string()
}
