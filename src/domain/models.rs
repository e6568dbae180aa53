use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Days a position may be held and still count as short term.
pub const SHORT_TERM_MAX_DAYS: i64 = 365;

// Holding record (one row of the seed dataset)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: i64,
    pub name: String,
    pub user_id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub shares: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub cost_basis_per_share: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub current_price: Decimal,
    pub purchase_date: DateTime<Utc>, // RFC3339 in CSV seeds
}

impl Investment {
    /// Owner comparison ignores case, so "user1" and "USER1" are the same user.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id
            .chars()
            .flat_map(char::to_lowercase)
            .eq(user_id.chars().flat_map(char::to_lowercase))
    }

    /// Checks the record invariants a store must uphold before serving it.
    pub fn validate(&self) -> Result<(), String> {
        if self.id <= 0 {
            return Err("id must be a positive integer".to_string());
        }
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_string());
        }
        if self.shares < Decimal::ZERO {
            return Err("shares must not be negative".to_string());
        }
        if self.cost_basis_per_share < Decimal::ZERO {
            return Err("cost basis per share must not be negative".to_string());
        }
        if self.current_price < Decimal::ZERO {
            return Err("current price must not be negative".to_string());
        }
        Ok(())
    }
}

// Listing projection (id + name only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentSummary {
    pub id: i64,
    pub name: String,
}

impl From<&Investment> for InvestmentSummary {
    fn from(investment: &Investment) -> Self {
        Self {
            id: investment.id,
            name: investment.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoldingTerm {
    #[serde(rename = "Short Term")]
    ShortTerm,
    #[serde(rename = "Long Term")]
    LongTerm,
}

impl HoldingTerm {
    /// Whole days are truncated, so 365 days and 23 hours is still short term.
    pub fn classify(purchase_date: DateTime<Utc>, as_of: DateTime<Utc>) -> Self {
        if (as_of - purchase_date).num_days() <= SHORT_TERM_MAX_DAYS {
            HoldingTerm::ShortTerm
        } else {
            HoldingTerm::LongTerm
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HoldingTerm::ShortTerm => "Short Term",
            HoldingTerm::LongTerm => "Long Term",
        }
    }
}

// Performance view, computed per request and never stored
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentDetails {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub shares: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub cost_basis_per_share: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub current_value: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub current_price: Decimal,
    pub term: HoldingTerm,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_gain_loss: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rust_decimal_macros::dec;

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn make_investment(id: i64, user_id: &str) -> Investment {
        Investment {
            id,
            name: "Apple".to_string(),
            user_id: user_id.to_string(),
            shares: dec!(100),
            cost_basis_per_share: dec!(150.00),
            current_price: dec!(175.50),
            purchase_date: as_of() - Duration::days(400),
        }
    }

    #[test]
    fn test_term_boundary_is_short_term() {
        let now = as_of();
        assert_eq!(HoldingTerm::classify(now - Duration::days(365), now), HoldingTerm::ShortTerm);
        assert_eq!(HoldingTerm::classify(now - Duration::days(366), now), HoldingTerm::LongTerm);
    }

    #[test]
    fn test_term_truncates_partial_days() {
        let now = as_of();
        let purchased = now - Duration::days(365) - Duration::hours(23);
        assert_eq!(HoldingTerm::classify(purchased, now), HoldingTerm::ShortTerm);
    }

    #[test]
    fn test_term_future_purchase_is_short_term() {
        let now = as_of();
        assert_eq!(HoldingTerm::classify(now + Duration::days(10), now), HoldingTerm::ShortTerm);
    }

    #[test]
    fn test_term_serializes_as_label() {
        assert_eq!(serde_json::to_string(&HoldingTerm::ShortTerm).unwrap(), "\"Short Term\"");
        assert_eq!(serde_json::to_string(&HoldingTerm::LongTerm).unwrap(), "\"Long Term\"");
        assert_eq!(HoldingTerm::LongTerm.label(), "Long Term");
    }

    #[test]
    fn test_owner_match_ignores_case() {
        let inv = make_investment(1, "user1");
        assert!(inv.is_owned_by("USER1"));
        assert!(inv.is_owned_by("User1"));
        assert!(!inv.is_owned_by("user2"));
        assert!(!inv.is_owned_by(""));
        assert!(!inv.is_owned_by("user10"));
        assert!(!inv.is_owned_by("user"));
    }

    #[test]
    fn test_owner_match_folds_non_ascii() {
        let inv = make_investment(1, "Émile");
        assert!(inv.is_owned_by("émile"));
        assert!(inv.is_owned_by("ÉMILE"));
        assert!(!inv.is_owned_by("emile"));
    }

    #[test]
    fn test_validate_rejects_broken_records() {
        assert!(make_investment(1, "user1").validate().is_ok());
        assert!(make_investment(0, "user1").validate().is_err());

        let mut unnamed = make_investment(2, "user1");
        unnamed.name = "  ".to_string();
        assert!(unnamed.validate().is_err());

        let mut short = make_investment(3, "user1");
        short.shares = dec!(-1);
        assert!(short.validate().is_err());

        let mut free = make_investment(4, "user1");
        free.cost_basis_per_share = Decimal::ZERO;
        free.current_price = Decimal::ZERO;
        assert!(free.validate().is_ok());
    }

    #[test]
    fn test_details_serialize_camel_case_numbers() {
        let details = InvestmentDetails {
            id: 2,
            name: "Microsoft".to_string(),
            shares: dec!(50),
            cost_basis_per_share: dec!(300.00),
            current_value: dec!(14287.50),
            current_price: dec!(285.75),
            term: HoldingTerm::ShortTerm,
            total_gain_loss: dec!(-712.50),
        };
        let v = serde_json::to_value(&details).unwrap();
        assert_eq!(v["costBasisPerShare"].as_f64(), Some(300.0));
        assert_eq!(v["currentValue"].as_f64(), Some(14287.5));
        assert_eq!(v["totalGainLoss"].as_f64(), Some(-712.5));
        assert_eq!(v["term"], "Short Term");
    }

    #[test]
    fn test_details_keep_decimal_digits_on_the_wire() {
        let details = InvestmentDetails {
            id: 9,
            name: "Berkshire".to_string(),
            shares: dec!(1),
            cost_basis_per_share: dec!(1234567890123.4567),
            current_value: dec!(1234567890123.4567),
            current_price: dec!(1234567890123.4567),
            term: HoldingTerm::LongTerm,
            total_gain_loss: dec!(0.00),
        };
        let body = serde_json::to_string(&details).unwrap();
        assert!(body.contains("\"currentValue\":1234567890123.4567"), "{}", body);
        assert!(body.contains("\"totalGainLoss\":0.00"), "{}", body);
    }
}
