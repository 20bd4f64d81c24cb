//! Driving port for user reads served by the users service.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// User read use-cases.
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every user.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Return one user, or `not_found`.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;
}
