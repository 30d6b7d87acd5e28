//! Rule engine auditing energy-subsidy compliance dossiers
//!
//! Input: a [`TextBundle`] of extracted document texts (produced upstream
//! by native PDF extraction with an OCR fallback) and the [`CaseFields`]
//! entered in the case-management system. Output: a [`Verdict`] with a
//! compliant/non-compliant status and the flat list of findings.
//!
//! Evaluation is a pure function of its inputs: classification binds
//! documents to roles by filename, shared facts (reference dates, the
//! announced subsidy amount) are resolved once, then the per-role rule
//! table and the cross-document checks run over them. Data-quality issues
//! never raise; they become problem strings.

pub mod classify;
pub mod config;
pub mod extract;
pub mod facts;
pub mod normalize;
pub mod patterns;
pub mod report;
pub mod rules;

use dossier_types::{CaseFields, TextBundle, Verdict};

pub use classify::DocRole;
pub use config::RuleConfig;

/// AuditEngine entry point.
pub struct AuditEngine {
    config: RuleConfig,
}

impl AuditEngine {
    pub fn new() -> Self {
        Self::with_config(RuleConfig::default())
    }

    pub fn with_config(config: RuleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Audit one dossier. Same inputs always produce the same verdict;
    /// nothing is cached between calls.
    pub fn audit(&self, bundle: &TextBundle, fields: &CaseFields) -> Verdict {
        let classified = classify::classify(bundle);
        let facts = facts::FactContext::build(&classified);

        let structural = report::structural_problems(bundle);
        let role_problems = rules::run_role_checks(&classified, &facts, fields, &self.config);
        let cross_problems = rules::consistency::run_cross_checks(&facts, fields, &self.config);

        report::aggregate(structural, role_problems, cross_problems)
    }
}

impl Default for AuditEngine {
    fn default() -> Self {
        Self::new()
    }
}
