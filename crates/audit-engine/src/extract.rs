//! Date and amount extraction over normalized text
//!
//! Extraction is pattern-anchored and failure-tolerant: a pattern that does
//! not match, or matches something that is not a valid date or number,
//! yields `None`. Callers turn absences into problem strings.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DATE_ANY: Regex = Regex::new(r"\b(\d{2}/\d{2}/\d{4})\b").unwrap();
}

/// Digit group with a two-digit decimal part, `,` or `.` separator,
/// optional space thousands separators ("2 538,90").
const AMOUNT_PATTERN: &str = r"(\d[\d\s]*[.,]\d{2})";

/// Maximum OCR noise tolerated between a label and its date.
const LABEL_GAP: &str = "[^0-9]{0,30}";

/// Parse a `dd/mm/yyyy` literal into a calendar date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
}

/// First `dd/mm/yyyy` pattern anywhere in the text, parsed. An invalid
/// literal (e.g. "99/99/2024") is absent, not an error.
pub fn find_date_any(text: &str) -> Option<NaiveDate> {
    DATE_ANY
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| parse_date(m.as_str()))
}

/// Date immediately following a label phrase, with up to 30 non-digit
/// characters of OCR noise tolerated between the two.
pub fn find_labeled_date(text: &str, label: &str) -> Option<NaiveDate> {
    let pattern = format!(
        r"{}{}(\d{{2}}/\d{{2}}/\d{{4}})",
        regex::escape(label),
        LABEL_GAP
    );
    let re = Regex::new(&pattern).expect("escaped label pattern is valid");
    re.captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| parse_date(m.as_str()))
}

/// Raw text of the first amount-looking figure after an anchor phrase.
/// The lookahead is unbounded within the normalized text; the anchor says
/// "the next figure found is the value".
pub fn find_amount_near(text: &str, anchor: &str) -> Option<String> {
    let pattern = format!(r"{}.*?{}", regex::escape(anchor), AMOUNT_PATTERN);
    let re = Regex::new(&pattern).expect("escaped anchor pattern is valid");
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Numeric value of a raw figure: spaces and no-break spaces stripped,
/// comma folded to dot.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.replace([' ', '\u{a0}'], "")
        .replace(',', ".")
        .parse::<f64>()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn finds_first_date_in_text() {
        assert_eq!(
            find_date_any("signe le 15/02/2024 puis le 20/02/2024"),
            Some(date(2024, 2, 15))
        );
    }

    #[test]
    fn invalid_calendar_date_is_absent() {
        assert_eq!(find_date_any("le 99/99/2024"), None);
        assert_eq!(find_date_any("le 30/02/2024"), None);
        assert_eq!(find_date_any("aucune date ici"), None);
    }

    #[test]
    fn labeled_date_tolerates_ocr_noise_between_label_and_value() {
        assert_eq!(
            find_labeled_date("date de cette proposition : . ~ 15/02/2024", "date de cette proposition"),
            Some(date(2024, 2, 15))
        );
        assert_eq!(
            find_labeled_date("devis n deux du 15/02/2024", "devis"),
            Some(date(2024, 2, 15))
        );
    }

    #[test]
    fn labeled_date_gap_is_bounded_to_thirty_characters() {
        let text = format!("date de facture {} 15/02/2024", "x".repeat(31));
        assert_eq!(find_labeled_date(&text, "date de facture"), None);
    }

    #[test]
    fn labeled_date_gap_rejects_intervening_digits() {
        assert_eq!(
            find_labeled_date("date de facture n 12 du 15/02/2024", "date de facture"),
            None
        );
    }

    #[test]
    fn amount_near_anchor_with_thousands_separator() {
        assert_eq!(
            find_amount_near("une prime d un montant de 2 538,90 euros", "une prime d un montant de"),
            Some("2 538,90".to_string())
        );
    }

    #[test]
    fn amount_near_anchor_skips_non_numeric_words() {
        assert_eq!(
            find_amount_near("prix unitaire ttc environ 42,31 euros", "prix unitaire"),
            Some("42,31".to_string())
        );
        assert_eq!(find_amount_near("prix unitaire a definir", "prix unitaire"), None);
    }

    #[test]
    fn amount_requires_two_decimal_digits() {
        assert_eq!(find_amount_near("total 1234 euros", "total"), None);
    }

    #[test]
    fn parse_amount_folds_separators() {
        assert_eq!(parse_amount("2 538,90"), Some(2538.90));
        assert_eq!(parse_amount("42.31"), Some(42.31));
        assert_eq!(parse_amount("abc"), None);
    }
}
