use crate::domain::models::{InvestmentDetails, InvestmentSummary};
use crate::domain::repository::{InvestmentRepo, RepoResult};
use crate::usecases::performance::compute_details;
use chrono::Utc;
use std::sync::Arc;

pub struct InvestmentService {
    pub repo: Arc<dyn InvestmentRepo>,
}

impl InvestmentService {
    pub fn new(repo: Arc<dyn InvestmentRepo>) -> Self {
        Self { repo }
    }

    /// Id and name of every investment the user holds. No input validation happens here.
    pub async fn get_user_investments(&self, user_id: &str) -> RepoResult<Vec<InvestmentSummary>> {
        tracing::info!(user_id = %user_id, "Getting investments for user");

        let summaries: Vec<InvestmentSummary> = self
            .repo
            .find_by_user(user_id)
            .await
            .inspect_err(|e| tracing::error!(error = %e, user_id = %user_id, "Failed getting investments for user"))?
            .iter()
            .map(InvestmentSummary::from)
            .collect();

        tracing::info!(count = summaries.len(), user_id = %user_id, "Found investments for user");
        Ok(summaries)
    }

    /// Performance details for one investment, or `None` when the id is unknown.
    /// Term is classified against the wall clock at call time.
    pub async fn get_investment_details(&self, investment_id: i64) -> RepoResult<Option<InvestmentDetails>> {
        tracing::info!(investment_id, "Getting investment details");

        let investment = self
            .repo
            .find_by_id(investment_id)
            .await
            .inspect_err(|e| tracing::error!(error = %e, investment_id, "Failed getting investment details"))?;

        let Some(investment) = investment else {
            tracing::warn!(investment_id, "Investment not found");
            return Ok(None);
        };

        let details = compute_details(&investment, Utc::now())
            .inspect_err(|e| tracing::error!(error = %e, investment_id, "Failed calculating investment details"))?;
        tracing::info!(investment_id, term = details.term.label(), "Calculated investment details");
        Ok(Some(details))
    }
}
