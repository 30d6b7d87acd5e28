//! Checks applied to the contribution frame (cadre de contribution)

use crate::patterns::SUBSIDY_PHRASE;

use super::RuleContext;

/// The frame must announce the subsidy: "une prime d'un montant de X euros".
pub fn check_subsidy_phrase(ctx: &RuleContext) -> Vec<String> {
    if ctx.doc.normalized.contains(SUBSIDY_PHRASE) {
        Vec::new()
    } else {
        vec![
            "CADRE: the phrase \"une prime d'un montant de ... euros\" was not clearly found."
                .to_string(),
        ]
    }
}

/// "Date de cette proposition" must be present. When it is, the date it
/// carries is compared against the quote date by the cross-checks; the two
/// problems are mutually exclusive.
pub fn check_proposal_label(ctx: &RuleContext) -> Vec<String> {
    if ctx.facts.proposal_date.located {
        Vec::new()
    } else {
        vec![
            "CADRE: the mention \"Date de cette proposition\" was not clearly found.".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, DocRole};
    use crate::config::RuleConfig;
    use crate::facts::FactContext;
    use dossier_types::{CaseFields, TextBundle};

    fn problems_for(text: &str, check: fn(&RuleContext) -> Vec<String>) -> Vec<String> {
        let bundle = TextBundle::from_pairs([("cadre.pdf", text)]).unwrap();
        let classified = classify(&bundle);
        let facts = FactContext::build(&classified);
        let fields = CaseFields::new();
        let config = RuleConfig::default();
        let ctx = RuleContext {
            doc: classified
                .get(DocRole::ContributionFrame)
                .expect("frame in fixture"),
            bundle: &classified,
            facts: &facts,
            fields: &fields,
            config: &config,
        };
        check(&ctx)
    }

    #[test]
    fn subsidy_phrase_present_passes() {
        assert!(problems_for(
            "une prime d un montant de 2538,90 euros",
            check_subsidy_phrase
        )
        .is_empty());
    }

    #[test]
    fn missing_subsidy_phrase_is_reported() {
        let problems = problems_for("montant de la prime : 2538,90", check_subsidy_phrase);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("une prime d'un montant de"));
    }

    #[test]
    fn proposal_label_with_a_date_passes() {
        assert!(problems_for(
            "Date de cette proposition : 15/02/2024",
            check_proposal_label
        )
        .is_empty());
    }

    #[test]
    fn missing_proposal_label_is_reported() {
        let problems = problems_for("etabli le 15/02/2024", check_proposal_label);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("Date de cette proposition"));
    }
}
