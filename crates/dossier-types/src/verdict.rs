//! Audit outcome: a status plus the flat list of findings
//!
//! The `{ status, problems }` shape is shared with the checkers used for
//! other delegate organizations and with the export layer; it must stay
//! stable.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Compliant,
    NonCompliant,
}

/// One evaluation result. `status` is `NonCompliant` exactly when
/// `problems` is non-empty; construct through [`Verdict::from_problems`]
/// to keep the two coupled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: Status,
    pub problems: Vec<String>,
}

impl Verdict {
    pub fn from_problems(problems: Vec<String>) -> Self {
        let status = if problems.is_empty() {
            Status::Compliant
        } else {
            Status::NonCompliant
        };
        Self { status, problems }
    }

    pub fn is_compliant(&self) -> bool {
        self.status == Status::Compliant
    }

    /// Headline reasons: the first `limit` problems, or a single fixed
    /// line when the dossier is compliant.
    pub fn summary_reasons(&self, limit: usize) -> Vec<String> {
        if self.is_compliant() {
            vec!["Dossier compliant: no major deviation detected.".to_string()]
        } else {
            self.problems.iter().take(limit).cloned().collect()
        }
    }
}
