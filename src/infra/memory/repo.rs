use crate::domain::error::RepoError;
use crate::domain::models::Investment;
use crate::domain::repository::{InvestmentRepo, RepoResult};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Read-only table of investments, built once at startup and shared by every request.
pub struct InMemoryRepo {
    investments: Vec<Investment>,
}

impl InMemoryRepo {
    /// Rejects tables that break a record invariant or reuse an id.
    pub fn new(investments: Vec<Investment>) -> RepoResult<Self> {
        let mut seen = HashSet::new();
        for inv in &investments {
            inv.validate().map_err(|reason| RepoError::InvalidRecord { id: inv.id, reason })?;
            if !seen.insert(inv.id) {
                return Err(RepoError::DuplicateId(inv.id));
            }
        }
        Ok(Self { investments })
    }

    /// The built-in dataset, with purchase dates relative to `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            investments: seed_investments(now),
        }
    }

    pub fn count(&self) -> usize {
        self.investments.len()
    }
}

#[async_trait]
impl InvestmentRepo for InMemoryRepo {
    async fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<Investment>> {
        Ok(self
            .investments
            .iter()
            .filter(|i| i.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Investment>> {
        Ok(self.investments.iter().find(|i| i.id == id).cloned())
    }
}

fn seed(
    id: i64,
    name: &str,
    user_id: &str,
    shares: i64,
    cost_basis_per_share: Decimal,
    current_price: Decimal,
    purchase_date: DateTime<Utc>,
) -> Investment {
    Investment {
        id,
        name: name.to_string(),
        user_id: user_id.to_string(),
        shares: Decimal::from(shares),
        cost_basis_per_share,
        current_price,
        purchase_date,
    }
}

pub fn seed_investments(now: DateTime<Utc>) -> Vec<Investment> {
    // Decimal::new(mantissa, scale): 15000 at scale 2 is 150.00
    vec![
        seed(1, "Apple", "user1", 100, Decimal::new(15000, 2), Decimal::new(17550, 2), now - Duration::days(400)),
        seed(2, "Microsoft", "user1", 50, Decimal::new(30000, 2), Decimal::new(28575, 2), now - Duration::days(200)),
        seed(3, "Google", "user1", 200, Decimal::new(40000, 2), Decimal::new(42025, 2), now - Duration::days(600)),
        seed(4, "Tesla", "user2", 25, Decimal::new(80000, 2), Decimal::new(75000, 2), now - Duration::days(150)),
        seed(5, "Meta", "user1", 10, Decimal::new(100000, 2), Decimal::new(102550, 2), now - Duration::days(30)),
    ]
}
