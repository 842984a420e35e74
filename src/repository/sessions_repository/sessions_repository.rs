use super::Session;
use crate::repository;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionsRepository: Send + Sync {
    ///
    /// Finds session created for the token by the sign-in flow
    ///
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, repository::Error>;
}
