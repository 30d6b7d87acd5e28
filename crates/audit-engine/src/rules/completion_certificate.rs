//! Checks applied to the completion certificate (attestation de fin de travaux)

use super::RuleContext;

/// A signature date like "Le : 28/10/2025" must be found. When it is, the
/// cross-checks compare it against the invoice and delivery-note dates;
/// when it is not, that absence is its own problem and no comparison runs.
pub fn check_signed_date(ctx: &RuleContext) -> Vec<String> {
    if ctx.facts.certificate_date.located {
        Vec::new()
    } else {
        vec![
            "AFT: no date like \"Le : jj/mm/aaaa\" was clearly found on the completion \
             certificate."
                .to_string(),
        ]
    }
}
