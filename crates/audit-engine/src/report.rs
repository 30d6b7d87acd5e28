//! Verdict assembly
//!
//! Problems are concatenated in a fixed order: structural findings about
//! the bundle itself, then role findings in processing order, then the
//! cross-checks. No deduplication; the status follows the merged list.

use dossier_types::{TextBundle, Verdict};

/// Bundle entries whose extraction produced no exploitable text. The file
/// was submitted, so the finding is reported here rather than as a missing
/// role: the filename may still classify.
pub fn structural_problems(bundle: &TextBundle) -> Vec<String> {
    bundle
        .iter()
        .filter(|(_, text)| text.trim().is_empty())
        .map(|(filename, _)| {
            format!(
                "The file '{filename}' contains no exploitable text (probably a scan or an \
                 image); the related checks must be done manually."
            )
        })
        .collect()
}

/// Merge the three problem groups into the final verdict.
pub fn aggregate(
    structural: Vec<String>,
    role_problems: Vec<String>,
    cross_problems: Vec<String>,
) -> Verdict {
    let mut problems = structural;
    problems.extend(role_problems);
    problems.extend(cross_problems);
    Verdict::from_problems(problems)
}
