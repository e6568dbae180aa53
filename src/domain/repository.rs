use crate::domain::error::RepoError;
use crate::domain::models::Investment;
use async_trait::async_trait;

pub type RepoResult<T> = Result<T, RepoError>;

#[async_trait]
pub trait InvestmentRepo: Send + Sync {
    // All records owned by `user_id` (case-insensitive), in storage order.
    // Unknown users yield an empty vec, not an error.
    async fn find_by_user(&self, user_id: &str) -> RepoResult<Vec<Investment>>;

    // None when no record carries `id`
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Investment>>;
}
