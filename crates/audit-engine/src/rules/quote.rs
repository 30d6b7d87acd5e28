//! Checks applied to the quote (devis)

use crate::classify::DocRole;
use crate::extract;
use crate::normalize::fold_decimal_separators;
use crate::patterns::{
    BALANCE_DUE_ZERO, LIGHTING_AMBIANCE, LIGHTING_PRIVATE, LIGHTING_TYPE_VARIANTS,
    LUMINAIRE_LINE_ITEM, QUOTE_HEADER,
};

use super::RuleContext;

/// Header like "DEVIS 2024-00123" somewhere in the document.
pub fn check_header(ctx: &RuleContext) -> Vec<String> {
    if QUOTE_HEADER.is_match(&ctx.doc.normalized) {
        Vec::new()
    } else {
        vec!["DEVIS: no header like \"DEVIS 2024-xxxxx\" was clearly found.".to_string()]
    }
}

/// Lighting classification "Éclairage ambiance ou privé". OCR scatters the
/// sentence, so it is accepted on the quote, the invoice or the honor
/// statement; the first document carrying it satisfies the check.
pub fn check_lighting_type(ctx: &RuleContext) -> Vec<String> {
    let mut targets = vec![ctx.doc.normalized.as_str()];
    if let Some(text) = ctx.bundle.normalized(DocRole::Invoice) {
        targets.push(text);
    }
    if let Some(text) = ctx.bundle.normalized(DocRole::HonorStatement) {
        targets.push(text);
    }

    let found = targets.iter().any(|text| {
        LIGHTING_TYPE_VARIANTS.iter().any(|v| text.contains(v))
            && text.contains(LIGHTING_AMBIANCE)
            && text.contains(LIGHTING_PRIVATE)
    });

    if found {
        Vec::new()
    } else {
        vec![
            "DEVIS: the lighting type \"Eclairage ambiance ou prive\" was not clearly found \
             in the documents (devis / facture / AH)."
                .to_string(),
        ]
    }
}

/// Regulated unit price for the luminaire line item. Silent when the line
/// item itself is absent; otherwise a missing figure, an uninterpretable
/// figure and an out-of-range figure are three distinct problems.
pub fn check_unit_price(ctx: &RuleContext) -> Vec<String> {
    let normalized = &ctx.doc.normalized;
    if !normalized.contains(LUMINAIRE_LINE_ITEM) {
        return Vec::new();
    }

    match extract::find_amount_near(normalized, LUMINAIRE_LINE_ITEM) {
        None => vec![format!(
            "DEVIS: no clear unit price found for \"{LUMINAIRE_LINE_ITEM}\"."
        )],
        Some(raw) => match extract::parse_amount(&raw) {
            None => vec![format!(
                "DEVIS: the unit price for \"{LUMINAIRE_LINE_ITEM}\" is not interpretable."
            )],
            Some(value)
                if value < ctx.config.unit_price_min || value > ctx.config.unit_price_max =>
            {
                vec![format!(
                    "DEVIS: unit price for \"{LUMINAIRE_LINE_ITEM}\" outside the expected \
                     range [{:.2}, {:.2}], found {raw}.",
                    ctx.config.unit_price_min, ctx.config.unit_price_max
                )]
            }
            Some(_) => Vec::new(),
        },
    }
}

/// The resolved quote date must fall inside the configured campaign window;
/// not being able to resolve a date at all is its own problem.
pub fn check_quote_date(ctx: &RuleContext) -> Vec<String> {
    let start = ctx.config.quote_window_start;
    let end = ctx.config.quote_window_end;

    match ctx.facts.quote_date {
        Some(date) if date < start || date > end => vec![format!(
            "DEVIS: the quote date {} is not between {} and {}.",
            date.format("%d/%m/%Y"),
            start.format("%d/%m/%Y"),
            end.format("%d/%m/%Y")
        )],
        Some(_) => Vec::new(),
        None => vec![format!(
            "DEVIS: the quote date could not be clearly determined \
             (expected between {} and {}).",
            start.format("%d/%m/%Y"),
            end.format("%d/%m/%Y")
        )],
    }
}

/// "Reste à payer 0,00 €" must appear on the quote.
pub fn check_balance_due(ctx: &RuleContext) -> Vec<String> {
    if BALANCE_DUE_ZERO.is_match(&fold_decimal_separators(&ctx.doc.normalized)) {
        Vec::new()
    } else {
        vec!["DEVIS: the mention \"Reste a payer 0,00\" was not clearly found.".to_string()]
    }
}
