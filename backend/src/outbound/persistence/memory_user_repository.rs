//! In-memory adapter for the user store port.

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserDraft, UserId, UserPatch};

use super::memory_table::{MemoryTable, TablePoisoned};

fn map_table_error(error: TablePoisoned) -> UserRepositoryError {
    UserRepositoryError::storage(error.to_string())
}

/// User table held in process memory.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: MemoryTable<User>,
}

impl InMemoryUserRepository {
    /// Create an empty user table.
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_all(&self) -> Result<Vec<User>, UserRepositoryError> {
        self.table.all().map_err(map_table_error)
    }

    fn save(&self, draft: UserDraft) -> Result<User, UserRepositoryError> {
        self.table
            .insert_with(|id| User::from_draft(UserId::new(id), draft))
            .map_err(map_table_error)
    }

    fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        self.table.get(id.get()).map_err(map_table_error)
    }

    fn update(&self, id: UserId, patch: UserPatch) -> Result<Option<User>, UserRepositoryError> {
        self.table
            .modify(id.get(), |user| user.apply(patch))
            .map_err(map_table_error)
    }

    fn delete(&self, id: UserId) -> Result<bool, UserRepositoryError> {
        self.table.remove(id.get()).map_err(map_table_error)
    }
}
