//! Cross-document comparisons
//!
//! Every comparison needs both of its operands; a missing side means the
//! comparison is skipped silently, because the absence was already reported
//! by the owning role. Dates compare by equality, amounts within the
//! configured absolute tolerance.

use chrono::NaiveDate;
use dossier_types::CaseFields;

use crate::config::RuleConfig;
use crate::extract;
use crate::facts::{FactContext, FrameAmount};

/// Run the cross-checks in their fixed reporting order.
pub fn run_cross_checks(
    facts: &FactContext,
    fields: &CaseFields,
    config: &RuleConfig,
) -> Vec<String> {
    let mut problems = Vec::new();
    problems.extend(check_delivery_vs_invoice(facts));
    problems.extend(check_certificate_vs_invoice(facts));
    problems.extend(check_certificate_vs_delivery(facts));
    problems.extend(check_frame_amount(facts, fields, config));
    problems.extend(check_proposal_vs_quote(facts));
    problems
}

fn fmt(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Goods must be delivered the day the invoice is issued.
fn check_delivery_vs_invoice(facts: &FactContext) -> Vec<String> {
    match (facts.delivery_date, facts.invoice_date) {
        (Some(delivery), Some(invoice)) if delivery != invoice => vec![format!(
            "BON DE LIVRAISON: the delivery note date ({}) differs from the invoice \
             date ({}).",
            fmt(delivery),
            fmt(invoice)
        )],
        _ => Vec::new(),
    }
}

fn check_certificate_vs_invoice(facts: &FactContext) -> Vec<String> {
    match (facts.certificate_date.date, facts.invoice_date) {
        (Some(certificate), Some(invoice)) if certificate != invoice => vec![format!(
            "AFT: the date \"Le {}\" differs from the invoice date ({}).",
            fmt(certificate),
            fmt(invoice)
        )],
        _ => Vec::new(),
    }
}

fn check_certificate_vs_delivery(facts: &FactContext) -> Vec<String> {
    match (facts.certificate_date.date, facts.delivery_date) {
        (Some(certificate), Some(delivery)) if certificate != delivery => vec![format!(
            "AFT: the date \"Le {}\" differs from the delivery note date ({}).",
            fmt(certificate),
            fmt(delivery)
        )],
        _ => Vec::new(),
    }
}

/// The amount announced by the frame must match the case-declared subsidy
/// within the tolerance. Skipped when the frame phrase is absent (already
/// reported) or the case field is empty; the declared value, the frame
/// figure being absent and the frame figure being uninterpretable each get
/// their own wording.
fn check_frame_amount(
    facts: &FactContext,
    fields: &CaseFields,
    config: &RuleConfig,
) -> Vec<String> {
    let Some(frame_amount) = &facts.frame_amount else {
        return Vec::new();
    };
    if matches!(frame_amount, FrameAmount::PhraseMissing) {
        return Vec::new();
    }

    let declared = fields
        .get(&config.subsidy_field)
        .map(|v| v.trim())
        .unwrap_or("");
    if declared.is_empty() {
        return Vec::new();
    }

    let Some(declared_value) = extract::parse_amount(declared) else {
        return vec![format!(
            "CADRE: the declared subsidy amount \"{declared}\" is not interpretable as a \
             numeric value."
        )];
    };

    match frame_amount {
        FrameAmount::FigureMissing => vec![
            "CADRE: the phrase with the subsidy amount is not clearly exploitable.".to_string(),
        ],
        FrameAmount::Unparsable { .. } => vec![
            "CADRE: the subsidy amount in the contribution frame is not interpretable."
                .to_string(),
        ],
        FrameAmount::Value { raw, value }
            if (value - declared_value).abs() > config.amount_tolerance =>
        {
            vec![format!(
                "CADRE: the subsidy amount ({raw}) does not match the declared amount \
                 ({declared})."
            )]
        }
        _ => Vec::new(),
    }
}

/// "Date de cette proposition" must agree with the resolved quote date.
fn check_proposal_vs_quote(facts: &FactContext) -> Vec<String> {
    match (facts.proposal_date.date, facts.quote_date) {
        (Some(proposal), Some(quote)) if proposal != quote => vec![
            "CADRE: the \"Date de cette proposition\" does not match the quote date."
                .to_string(),
        ],
        _ => Vec::new(),
    }
}
