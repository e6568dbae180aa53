use crate::domain::error::RepoError;
use crate::domain::models::{HoldingTerm, Investment, InvestmentDetails};
use crate::domain::repository::RepoResult;
use chrono::{DateTime, Utc};

/// Derives the performance view of one holding as of `as_of`.
///
/// All arithmetic stays in `Decimal`, so values like 285.75 * 50 are exact.
/// Results outside the `Decimal` range come back as `RepoError::Overflow`.
pub fn compute_details(investment: &Investment, as_of: DateTime<Utc>) -> RepoResult<InvestmentDetails> {
    let overflow = || RepoError::Overflow(investment.id);
    let current_value = investment
        .shares
        .checked_mul(investment.current_price)
        .ok_or_else(overflow)?;
    let total_cost = investment
        .shares
        .checked_mul(investment.cost_basis_per_share)
        .ok_or_else(overflow)?;
    let total_gain_loss = current_value.checked_sub(total_cost).ok_or_else(overflow)?;

    Ok(InvestmentDetails {
        id: investment.id,
        name: investment.name.clone(),
        shares: investment.shares,
        cost_basis_per_share: investment.cost_basis_per_share,
        current_value,
        current_price: investment.current_price,
        term: HoldingTerm::classify(investment.purchase_date, as_of),
        total_gain_loss,
    })
}
