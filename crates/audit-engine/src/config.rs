//! Tunable rule constants
//!
//! The campaign-specific values (date window, regulated unit price,
//! tolerance) are configuration, not code, so a rule-set revision is a data
//! change that can be serialized and versioned on its own.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Inclusive calendar window the resolved quote date must fall in.
    pub quote_window_start: NaiveDate,
    pub quote_window_end: NaiveDate,
    /// Inclusive bounds for the luminaire unit price, in euros.
    pub unit_price_min: f64,
    pub unit_price_max: f64,
    /// Maximum absolute difference tolerated between the frame subsidy
    /// amount and the case-declared one.
    pub amount_tolerance: f64,
    /// Case field holding the declared subsidy amount.
    pub subsidy_field: String,
    /// Number of problems surfaced as headline summary reasons.
    pub summary_limit: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            quote_window_start: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            quote_window_end: NaiveDate::from_ymd_opt(2024, 2, 28).expect("valid date"),
            unit_price_min: 42.0,
            unit_price_max: 43.0,
            amount_tolerance: 0.01,
            subsidy_field: "Prime CEE".to_string(),
            summary_limit: 5,
        }
    }
}
