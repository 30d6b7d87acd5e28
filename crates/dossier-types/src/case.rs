//! Case records as supplied by the CRM or the upload form

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name to raw string value, exactly as entered upstream.
/// The engine consults at minimum the declared subsidy amount.
pub type CaseFields = BTreeMap<String, String>;

/// A compliance case: identity plus the CRM fields attached to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DossierCase {
    /// Case reference (e.g. "IEN-2024-0117").
    pub reference: String,
    /// Delegate organization the dossier was filed with.
    pub delegate: String,
    pub client_name: String,
    #[serde(default)]
    pub fields: CaseFields,
}

impl DossierCase {
    /// Readable label used in logs and exports.
    pub fn label(&self) -> String {
        format!("{} - {}", self.reference, self.client_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn label_combines_reference_and_client() {
        let case = DossierCase {
            reference: "IEN-2024-0117".to_string(),
            delegate: "HOMELIOR".to_string(),
            client_name: "DUPONT SARL".to_string(),
            fields: CaseFields::new(),
        };
        assert_eq!(case.label(), "IEN-2024-0117 - DUPONT SARL");
    }

    #[test]
    fn fields_default_to_empty_on_deserialize() {
        let case: DossierCase = serde_json::from_str(
            r#"{"reference":"R","delegate":"D","client_name":"C"}"#,
        )
        .unwrap();
        assert!(case.fields.is_empty());
    }
}
