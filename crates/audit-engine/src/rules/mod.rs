//! Role rule table and the generic evaluation loop
//!
//! Each role is a data record: its tag, the wording of its "document not
//! found" problem and an ordered list of checks. One loop interprets the
//! table; behavioral differences between roles live in the data, not in
//! six parallel code paths. Every check runs (no short-circuit) and each
//! failing check contributes its own problem string.

pub mod completion_certificate;
pub mod consistency;
pub mod contribution_frame;
pub mod honor_statement;
pub mod invoice;
pub mod quote;

use dossier_types::CaseFields;

use crate::classify::{ClassifiedBundle, ClassifiedDocument, DocRole};
use crate::config::RuleConfig;
use crate::facts::FactContext;

/// Everything a check may consult: the role's own document, the peer
/// documents, the shared facts and the case fields.
pub struct RuleContext<'a> {
    pub doc: &'a ClassifiedDocument,
    pub bundle: &'a ClassifiedBundle,
    pub facts: &'a FactContext,
    pub fields: &'a CaseFields,
    pub config: &'a RuleConfig,
}

type CheckFn = fn(&RuleContext) -> Vec<String>;

struct RoleRule {
    role: DocRole,
    /// Problem reported when no document fills the role.
    missing: &'static str,
    checks: &'static [CheckFn],
}

const RULE_TABLE: [RoleRule; 6] = [
    RoleRule {
        role: DocRole::Quote,
        missing: "DEVIS: no document whose filename contains 'devis' was found.",
        checks: &[
            quote::check_header,
            quote::check_lighting_type,
            quote::check_unit_price,
            quote::check_quote_date,
            quote::check_balance_due,
        ],
    },
    RoleRule {
        role: DocRole::ContributionFrame,
        missing: "CADRE: no document whose filename contains 'cadre' was found.",
        checks: &[
            contribution_frame::check_subsidy_phrase,
            contribution_frame::check_proposal_label,
        ],
    },
    RoleRule {
        role: DocRole::Invoice,
        missing: "FACTURE: no document whose filename contains 'facture' was found.",
        checks: &[invoice::check_balance_due],
    },
    RoleRule {
        role: DocRole::DeliveryNote,
        missing: "BON DE LIVRAISON: no document whose filename contains 'bon' and 'livraison' \
                  was found.",
        // The delivery note only contributes its date; the comparison
        // against the invoice date is a cross-check.
        checks: &[],
    },
    RoleRule {
        role: DocRole::HonorStatement,
        missing: "AH: no honor statement detected among the submitted documents \
                  (to verify manually).",
        checks: &[honor_statement::check_honor_phrase],
    },
    RoleRule {
        role: DocRole::CompletionCertificate,
        missing: "AFT: no completion certificate detected among the submitted documents \
                  (to verify manually).",
        checks: &[completion_certificate::check_signed_date],
    },
];

/// Evaluate every role in the fixed processing order. An absent document
/// yields exactly one "not found" problem and no further checks for that
/// role.
pub fn run_role_checks(
    bundle: &ClassifiedBundle,
    facts: &FactContext,
    fields: &CaseFields,
    config: &RuleConfig,
) -> Vec<String> {
    let mut problems = Vec::new();

    for rule in &RULE_TABLE {
        match bundle.get(rule.role) {
            None => problems.push(rule.missing.to_string()),
            Some(doc) => {
                let ctx = RuleContext {
                    doc,
                    bundle,
                    facts,
                    fields,
                    config,
                };
                for check in rule.checks {
                    problems.extend(check(&ctx));
                }
            }
        }
    }

    problems
}
