//! Ordered document-name to extracted-text mapping

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BundleError {
    /// Filenames are unique within a bundle; a duplicate insert is a caller
    /// contract violation, not a data-quality finding.
    #[error("document '{0}' is already present in the bundle")]
    DuplicateDocument(String),
}

/// One submitted document: its filename and the text extracted upstream
/// (native PDF text or OCR output; empty means "no exploitable text").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleEntry {
    pub filename: String,
    pub text: String,
}

/// The set of extracted documents for one dossier.
///
/// Entries keep their insertion order: classification binds the first
/// filename that matches a role, so the order documents were supplied is
/// part of the engine's input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextBundle {
    entries: Vec<BundleEntry>,
}

impl TextBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document. Fails if the filename is already present.
    pub fn insert(
        &mut self,
        filename: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<(), BundleError> {
        let filename = filename.into();
        if self.entries.iter().any(|e| e.filename == filename) {
            return Err(BundleError::DuplicateDocument(filename));
        }
        self.entries.push(BundleEntry {
            filename,
            text: text.into(),
        });
        Ok(())
    }

    /// Build a bundle from (filename, text) pairs, preserving their order.
    pub fn from_pairs<N, T>(pairs: impl IntoIterator<Item = (N, T)>) -> Result<Self, BundleError>
    where
        N: Into<String>,
        T: Into<String>,
    {
        let mut bundle = Self::new();
        for (name, text) in pairs {
            bundle.insert(name, text)?;
        }
        Ok(bundle)
    }

    pub fn get(&self, filename: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.filename == filename)
            .map(|e| e.text.as_str())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.filename.as_str(), e.text.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn preserves_insertion_order() {
        let bundle =
            TextBundle::from_pairs([("b.pdf", "two"), ("a.pdf", "one"), ("c.pdf", "three")])
                .unwrap();
        let names: Vec<_> = bundle.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b.pdf", "a.pdf", "c.pdf"]);
    }

    #[test]
    fn rejects_duplicate_filenames() {
        let mut bundle = TextBundle::new();
        bundle.insert("devis.pdf", "x").unwrap();
        assert_eq!(
            bundle.insert("devis.pdf", "y"),
            Err(BundleError::DuplicateDocument("devis.pdf".to_string()))
        );
    }

    #[test]
    fn empty_text_is_a_legal_value() {
        let bundle = TextBundle::from_pairs([("scan.pdf", "")]).unwrap();
        assert_eq!(bundle.get("scan.pdf"), Some(""));
    }
}
