//! Driven port for looking up product owners in the users service.
//!
//! The domain owns the outcome contract so the enrichment flow can decide
//! status codes from an explicit variant instead of inspecting a placeholder
//! value.

use async_trait::async_trait;

use crate::domain::{UserId, UserSummary};

use super::define_port_error;

define_port_error! {
    /// Ways a remote user lookup can fail.
    pub enum UserDirectoryError {
        /// The users service answered 404 for this identifier.
        NotFound { user_id: UserId } =>
            "user {user_id} not found in users service",
        /// The call did not settle within the configured timeout.
        Timeout { message: String } =>
            "users service timed out: {message}",
        /// The users service was unreachable or answered with a failure status.
        Unavailable { message: String } =>
            "users service unavailable: {message}",
        /// The users service answered 2xx with a body that is not a user.
        Malformed { message: String } =>
            "users service returned a malformed user: {message}",
    }
}

/// Port for fetching a single user summary from the users service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch the owner summary for `user_id`.
    ///
    /// Issues exactly one request; implementations do not retry.
    async fn fetch_user(&self, user_id: UserId) -> Result<UserSummary, UserDirectoryError>;
}
