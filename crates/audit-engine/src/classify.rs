//! Filename-based document role classification
//!
//! Each role carries an ordered list of keyword-set alternatives. A
//! filename matches a set when its lower-cased form contains every keyword
//! of the set; alternatives are tried in order and the first filename that
//! matches, in bundle order, is bound to the role. One filename may serve
//! several roles (some roles legitimately overlap in vocabulary).

use dossier_types::TextBundle;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalize::normalize;

/// Functional role a submitted document plays in the dossier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocRole {
    Quote,
    ContributionFrame,
    Invoice,
    DeliveryNote,
    HonorStatement,
    CompletionCertificate,
}

impl DocRole {
    /// Fixed processing order, also the order problems are reported in.
    pub const ALL: [DocRole; 6] = [
        DocRole::Quote,
        DocRole::ContributionFrame,
        DocRole::Invoice,
        DocRole::DeliveryNote,
        DocRole::HonorStatement,
        DocRole::CompletionCertificate,
    ];

    /// Document-name prefix used in problem messages (the names auditors
    /// know these documents by).
    pub fn label(self) -> &'static str {
        match self {
            DocRole::Quote => "DEVIS",
            DocRole::ContributionFrame => "CADRE",
            DocRole::Invoice => "FACTURE",
            DocRole::DeliveryNote => "BON DE LIVRAISON",
            DocRole::HonorStatement => "AH",
            DocRole::CompletionCertificate => "AFT",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Keyword alternatives per role, tried in order.
struct RoleSpec {
    role: DocRole,
    keyword_sets: &'static [&'static [&'static str]],
}

const ROLE_SPECS: [RoleSpec; 6] = [
    RoleSpec {
        role: DocRole::Quote,
        keyword_sets: &[&["devis"]],
    },
    RoleSpec {
        role: DocRole::ContributionFrame,
        keyword_sets: &[&["cadre"]],
    },
    RoleSpec {
        role: DocRole::Invoice,
        keyword_sets: &[&["facture"]],
    },
    RoleSpec {
        role: DocRole::DeliveryNote,
        keyword_sets: &[&["bon", "livraison"]],
    },
    RoleSpec {
        role: DocRole::HonorStatement,
        keyword_sets: &[&["ah"], &["attest"]],
    },
    RoleSpec {
        role: DocRole::CompletionCertificate,
        keyword_sets: &[&["aft"], &["fin", "travaux"]],
    },
];

/// A document bound to a role, with its normalized text precomputed.
#[derive(Debug, Clone)]
pub struct ClassifiedDocument {
    pub role: DocRole,
    pub filename: String,
    pub raw_text: String,
    pub normalized: String,
}

/// Classification result: at most one document per role.
#[derive(Debug, Clone, Default)]
pub struct ClassifiedBundle {
    docs: [Option<ClassifiedDocument>; 6],
}

impl ClassifiedBundle {
    pub fn get(&self, role: DocRole) -> Option<&ClassifiedDocument> {
        self.docs[role.index()].as_ref()
    }

    /// Normalized text of the document bound to `role`, if any.
    pub fn normalized(&self, role: DocRole) -> Option<&str> {
        self.get(role).map(|d| d.normalized.as_str())
    }

    fn set(&mut self, doc: ClassifiedDocument) {
        let idx = doc.role.index();
        self.docs[idx] = Some(doc);
    }
}

/// Bind each role to the first matching document of the bundle.
pub fn classify(bundle: &TextBundle) -> ClassifiedBundle {
    let mut classified = ClassifiedBundle::default();

    for spec in &ROLE_SPECS {
        'alternatives: for keyword_set in spec.keyword_sets {
            for (filename, text) in bundle.iter() {
                let name_lower = filename.to_lowercase();
                if keyword_set.iter().all(|k| name_lower.contains(k)) {
                    debug!(role = spec.role.label(), file = filename, "classified document");
                    classified.set(ClassifiedDocument {
                        role: spec.role,
                        filename: filename.to_string(),
                        raw_text: text.to_string(),
                        normalized: normalize(text),
                    });
                    break 'alternatives;
                }
            }
        }
    }

    classified
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bundle(pairs: &[(&str, &str)]) -> TextBundle {
        TextBundle::from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn binds_each_role_by_filename_keywords() {
        let classified = classify(&bundle(&[
            ("Devis_2024.pdf", "q"),
            ("cadre de contribution.pdf", "f"),
            ("FACTURE-17.pdf", "i"),
            ("bon_de_livraison.pdf", "d"),
        ]));
        assert_eq!(
            classified.get(DocRole::Quote).unwrap().filename,
            "Devis_2024.pdf"
        );
        assert_eq!(
            classified.get(DocRole::DeliveryNote).unwrap().filename,
            "bon_de_livraison.pdf"
        );
        assert!(classified.get(DocRole::HonorStatement).is_none());
    }

    #[test]
    fn first_filename_in_bundle_order_wins() {
        let classified = classify(&bundle(&[
            ("devis_v2.pdf", "second upload"),
            ("devis_v1.pdf", "first upload"),
        ]));
        assert_eq!(
            classified.get(DocRole::Quote).unwrap().filename,
            "devis_v2.pdf"
        );
    }

    #[test]
    fn delivery_note_requires_both_keywords() {
        let classified = classify(&bundle(&[("bon_commande.pdf", "x")]));
        assert!(classified.get(DocRole::DeliveryNote).is_none());
    }

    #[test]
    fn honor_statement_falls_back_to_attest_keyword() {
        let classified = classify(&bundle(&[("attestation_signee.pdf", "x")]));
        assert_eq!(
            classified.get(DocRole::HonorStatement).unwrap().filename,
            "attestation_signee.pdf"
        );
    }

    #[test]
    fn primary_keyword_set_beats_fallback_regardless_of_bundle_order() {
        let classified = classify(&bundle(&[
            ("attestation.pdf", "fallback match"),
            ("ah_signee.pdf", "primary match"),
        ]));
        assert_eq!(
            classified.get(DocRole::HonorStatement).unwrap().filename,
            "ah_signee.pdf"
        );
    }

    #[test]
    fn one_filename_may_fill_several_roles() {
        let classified = classify(&bundle(&[("attestation_aft.pdf", "both")]));
        assert_eq!(
            classified.get(DocRole::HonorStatement).unwrap().filename,
            "attestation_aft.pdf"
        );
        assert_eq!(
            classified
                .get(DocRole::CompletionCertificate)
                .unwrap()
                .filename,
            "attestation_aft.pdf"
        );
    }

    #[test]
    fn completion_certificate_fallback_matches_fin_de_travaux() {
        let classified = classify(&bundle(&[("attestation fin de travaux.pdf", "x")]));
        assert_eq!(
            classified
                .get(DocRole::CompletionCertificate)
                .unwrap()
                .filename,
            "attestation fin de travaux.pdf"
        );
    }

    #[test]
    fn normalized_text_is_precomputed() {
        let classified = classify(&bundle(&[("devis.pdf", "Éclairage   PRIVÉ")]));
        assert_eq!(
            classified.normalized(DocRole::Quote),
            Some("eclairage prive")
        );
    }
}
