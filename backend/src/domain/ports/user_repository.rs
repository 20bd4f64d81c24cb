//! Driven port for the local user table owned by the users service.

use crate::domain::{User, UserDraft, UserId, UserPatch};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user store adapters.
    pub enum UserRepositoryError {
        /// The store could not complete the operation.
        Storage { message: String } => "user store failed: {message}",
    }
}

/// Record store for users. Same blocking, per-record atomic contract as
/// [`super::ProductRepository`].
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Return every stored user in ascending identifier order.
    fn find_all(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Persist a new user and return it with its assigned identifier.
    fn save(&self, draft: UserDraft) -> Result<User, UserRepositoryError>;

    /// Fetch a user by identifier.
    fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError>;

    /// Apply `patch` to the stored user, or return `None` when absent.
    fn update(&self, id: UserId, patch: UserPatch) -> Result<Option<User>, UserRepositoryError>;

    /// Remove a user. Returns `true` when a record was removed.
    fn delete(&self, id: UserId) -> Result<bool, UserRepositoryError>;
}
