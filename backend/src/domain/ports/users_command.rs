//! Driving port for user mutations served by the users service.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId, UserPatch};

/// User write use-cases.
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a new user.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Replace name and email of an existing user.
    async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User, Error>;

    /// Remove a user.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
