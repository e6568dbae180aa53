use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::{InvestmentDetails, InvestmentSummary};
use crate::error::ApiError;
use crate::AppState;

pub const SERVICE_NAME: &str = "Investment Performance API";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub service: &'static str,
}

/// # GET /api/investments/user/{userId}
#[tracing::instrument(skip(state))]
pub async fn get_user_investments(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<InvestmentSummary>>, ApiError> {
    if user_id.trim().is_empty() {
        tracing::warn!("get_user_investments called with empty user_id");
        return Err(ApiError::BadRequest("User ID is required".to_string()));
    }

    let investments = state.service.get_user_investments(&user_id).await?;
    Ok(Json(investments))
}

/// # GET /api/investments/investment/{investmentId}
#[tracing::instrument(skip(state))]
pub async fn get_investment_details(
    State(state): State<AppState>,
    investment_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<InvestmentDetails>, ApiError> {
    // Ids are 32-bit; anything that does not parse as one is a bad request
    let Path(investment_id) = investment_id.map_err(|rejection| {
        tracing::warn!(error = %rejection, "get_investment_details called with malformed investment_id");
        ApiError::BadRequest("Investment ID must be a valid integer".to_string())
    })?;
    if investment_id <= 0 {
        tracing::warn!(investment_id, "get_investment_details called with invalid investment_id");
        return Err(ApiError::BadRequest("Investment ID must be greater than 0".to_string()));
    }

    match state.service.get_investment_details(i64::from(investment_id)).await? {
        Some(details) => Ok(Json(details)),
        None => {
            tracing::info!(investment_id, "Investment not found for user");
            Err(ApiError::NotFound(format!(
                "Investment with ID {} not found for user",
                investment_id
            )))
        }
    }
}

/// # GET /api/investments/health
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "Healthy",
        timestamp: Utc::now(),
        service: SERVICE_NAME,
    })
}
