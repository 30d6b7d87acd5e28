//! Checks applied to the invoice (facture)
//!
//! The invoice also feeds the quote-date fallback chain ("devis du ..."
//! cross-reference) and the invoice date consumed by the cross-checks, but
//! a divergence between invoice and quote dates is deliberately not flagged
//! here: the fallback chain already prefers consistent sources.

use crate::normalize::fold_decimal_separators;
use crate::patterns::BALANCE_DUE_ZERO;

use super::RuleContext;

/// "Reste à payer 0,00 €" must appear on the invoice.
pub fn check_balance_due(ctx: &RuleContext) -> Vec<String> {
    if BALANCE_DUE_ZERO.is_match(&fold_decimal_separators(&ctx.doc.normalized)) {
        Vec::new()
    } else {
        vec!["FACTURE: the mention \"Reste a payer 0,00\" was not clearly found.".to_string()]
    }
}
