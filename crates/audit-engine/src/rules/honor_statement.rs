//! Checks applied to the honor statement (attestation sur l'honneur)

use crate::patterns::HONOR_STATEMENT_VARIANTS;

use super::RuleContext;

/// The document must carry its own title. OCR often degrades it, so the
/// finding is worded as a manual-verification request; it still counts
/// like any other problem.
pub fn check_honor_phrase(ctx: &RuleContext) -> Vec<String> {
    let found = HONOR_STATEMENT_VARIANTS
        .iter()
        .any(|v| ctx.doc.normalized.contains(v));

    if found {
        Vec::new()
    } else {
        vec![
            "AH: document present but the mention \"attestation sur l'honneur\" is not \
             clearly readable (OCR), to verify manually."
                .to_string(),
        ]
    }
}
