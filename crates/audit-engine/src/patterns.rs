//! Fixed phrases and regex patterns shared by the rule set
//!
//! All patterns run over normalized text (lower-cased, accent-stripped,
//! whitespace-collapsed), which is why they are spelled without accents or
//! uppercase.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Quote header, e.g. "devis 2024-00123" after normalization.
    pub static ref QUOTE_HEADER: Regex = Regex::new(r"devis\s+2024[- ]?\d{4,}").unwrap();

    /// "Reste à payer 0,00 €" after decimal-separator folding.
    pub static ref BALANCE_DUE_ZERO: Regex = Regex::new(r"reste a payer\s*0\.0{2}").unwrap();

    /// Signature date at the bottom of the completion certificate,
    /// e.g. "Le : 28/10/2025" or "le 28/10/2025".
    pub static ref CERTIFICATE_SIGNED: Regex =
        Regex::new(r"\ble\s*[:\-]?\s*(\d{2}/\d{2}/\d{4})").unwrap();
}

/// Labels consumed through the labeled-date extractor.
pub const PROPOSAL_DATE_LABEL: &str = "date de cette proposition";
pub const INVOICE_DATE_LABEL: &str = "date de facture";
/// Cross-reference to the quote on the invoice ("devis du 15/02/2024").
pub const QUOTE_REF_LABEL: &str = "devis";

/// Contribution-frame subsidy sentence ("une prime d'un montant de X euros",
/// apostrophe lost to whitespace collapsing).
pub const SUBSIDY_PHRASE: &str = "une prime d un montant de";

/// Lighting classification, accepted with or without a surviving apostrophe.
pub const LIGHTING_TYPE_VARIANTS: &[&str] = &["type d eclairage", "type d'eclairage"];
pub const LIGHTING_AMBIANCE: &str = "eclairage ambiance";
pub const LIGHTING_PRIVATE: &str = "prive";

/// Quote line item whose unit price is regulated.
pub const LUMINAIRE_LINE_ITEM: &str = "mise en place de luminaires neufs";

/// Honor-statement title, both orthographic variants seen in OCR output.
pub const HONOR_STATEMENT_VARIANTS: &[&str] =
    &["attestation sur l honneur", "attestation sur l'honneur"];
