//! Shared facts resolved once, before any rule runs
//!
//! Several rules consume the same extracted values (the quote date feeds
//! the quote window check, the frame proposal check and nothing else twice
//! over). They are resolved here, in a defined order, into an immutable
//! context threaded through every evaluator.

use chrono::NaiveDate;
use tracing::debug;

use crate::classify::{ClassifiedBundle, DocRole};
use crate::extract;
use crate::patterns::{
    CERTIFICATE_SIGNED, INVOICE_DATE_LABEL, PROPOSAL_DATE_LABEL, QUOTE_REF_LABEL, SUBSIDY_PHRASE,
};

/// A date whose textual pattern may be located without denoting a valid
/// calendar date. Rules distinguish "label never seen" from "label seen
/// but the comparison cannot run".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateFact {
    pub located: bool,
    pub date: Option<NaiveDate>,
}

impl DateFact {
    fn absent() -> Self {
        Self::default()
    }
}

/// Subsidy amount announced by the contribution frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameAmount {
    /// The subsidy sentence itself is absent (reported by the frame rule).
    PhraseMissing,
    /// Sentence present but no figure follows it.
    FigureMissing,
    /// A figure was matched but is not numerically interpretable.
    Unparsable { raw: String },
    /// Parsed value, with the raw figure kept for problem messages.
    Value { raw: String, value: f64 },
}

/// Immutable cross-document facts.
#[derive(Debug, Clone, Default)]
pub struct FactContext {
    /// Quote date resolved through the trust hierarchy: frame label, then
    /// invoice cross-reference, then first bare date of frame, then of
    /// invoice.
    pub quote_date: Option<NaiveDate>,
    /// Labeled invoice date, else the invoice's first bare date.
    pub invoice_date: Option<NaiveDate>,
    /// First bare date of the delivery note.
    pub delivery_date: Option<NaiveDate>,
    /// "Le : dd/mm/yyyy" signature date on the completion certificate.
    pub certificate_date: DateFact,
    /// "Date de cette proposition" on the contribution frame.
    pub proposal_date: DateFact,
    /// Subsidy amount stated by the frame; `None` when no frame document.
    pub frame_amount: Option<FrameAmount>,
}

impl FactContext {
    pub fn build(classified: &ClassifiedBundle) -> Self {
        let frame = classified.normalized(DocRole::ContributionFrame);
        let invoice = classified.normalized(DocRole::Invoice);
        let delivery = classified.normalized(DocRole::DeliveryNote);
        let certificate = classified.normalized(DocRole::CompletionCertificate);

        let proposal_date = frame.map_or_else(DateFact::absent, |text| DateFact {
            located: locate_label(text, PROPOSAL_DATE_LABEL),
            date: extract::find_labeled_date(text, PROPOSAL_DATE_LABEL),
        });

        let quote_date = proposal_date
            .date
            .or_else(|| invoice.and_then(|t| extract::find_labeled_date(t, QUOTE_REF_LABEL)))
            .or_else(|| frame.and_then(extract::find_date_any))
            .or_else(|| invoice.and_then(extract::find_date_any));

        let invoice_date = invoice.and_then(|t| {
            extract::find_labeled_date(t, INVOICE_DATE_LABEL).or_else(|| extract::find_date_any(t))
        });

        let delivery_date = delivery.and_then(extract::find_date_any);

        let certificate_date = certificate.map_or_else(DateFact::absent, |text| {
            let capture = CERTIFICATE_SIGNED
                .captures(text)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string());
            DateFact {
                located: capture.is_some(),
                date: capture.as_deref().and_then(extract::parse_date),
            }
        });

        let frame_amount = frame.map(|text| {
            if !text.contains(SUBSIDY_PHRASE) {
                FrameAmount::PhraseMissing
            } else {
                match extract::find_amount_near(text, SUBSIDY_PHRASE) {
                    None => FrameAmount::FigureMissing,
                    Some(raw) => match extract::parse_amount(&raw) {
                        Some(value) => FrameAmount::Value { raw, value },
                        None => FrameAmount::Unparsable { raw },
                    },
                }
            }
        });

        debug!(
            quote = ?quote_date,
            invoice = ?invoice_date,
            delivery = ?delivery_date,
            "resolved reference dates"
        );

        Self {
            quote_date,
            invoice_date,
            delivery_date,
            certificate_date,
            proposal_date,
            frame_amount,
        }
    }
}

/// Whether the labeled-date pattern matched at all, valid date or not.
fn locate_label(text: &str, label: &str) -> bool {
    let pattern = format!(r"{}[^0-9]{{0,30}}\d{{2}}/\d{{2}}/\d{{4}}", regex::escape(label));
    regex::Regex::new(&pattern)
        .expect("escaped label pattern is valid")
        .is_match(text)
}
