//! User domain service backing the users service endpoints.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{UserRepository, UserRepositoryError, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserDraft, UserId, UserPatch};

fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Storage { message } => {
            Error::internal(format!("user store error: {message}"))
        }
    }
}

fn user_not_found(id: UserId) -> Error {
    Error::not_found(format!("user {id} not found"))
}

/// User service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UserService<R> {
    users: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a service over the user store.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users.find_all().map_err(map_repository_error)
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        self.users
            .find_by_id(id)
            .map_err(map_repository_error)?
            .ok_or_else(|| user_not_found(id))
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        let user = self.users.save(draft).map_err(map_repository_error)?;
        info!(user_id = %user.id, "user created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User, Error> {
        self.users
            .update(id, patch)
            .map_err(map_repository_error)?
            .ok_or_else(|| user_not_found(id))
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        if self.users.delete(id).map_err(map_repository_error)? {
            info!(user_id = %id, "user deleted");
            Ok(())
        } else {
            Err(user_not_found(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockUserRepository;

    fn ada() -> User {
        User {
            id: UserId::new(1),
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
        }
    }

    #[tokio::test]
    async fn get_user_returns_stored_record() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .withf(|id| *id == UserId::new(1))
            .times(1)
            .return_once(|_| Ok(Some(ada())));

        let user = UserService::new(Arc::new(repo))
            .get_user(UserId::new(1))
            .await
            .expect("user exists");

        assert_eq!(user, ada());
    }

    #[tokio::test]
    async fn get_user_maps_absence_to_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

        let error = UserService::new(Arc::new(repo))
            .get_user(UserId::new(2))
            .await
            .expect_err("user missing");

        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "user 2 not found");
    }

    #[tokio::test]
    async fn store_failures_map_to_internal_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all()
            .times(1)
            .return_once(|| Err(UserRepositoryError::storage("lock poisoned")));

        let error = UserService::new(Arc::new(repo))
            .list_users()
            .await
            .expect_err("store failure");

        assert_eq!(error.code(), ErrorCode::InternalError);
    }

    #[tokio::test]
    async fn delete_of_missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().times(1).return_once(|_| Ok(false));

        let error = UserService::new(Arc::new(repo))
            .delete_user(UserId::new(3))
            .await
            .expect_err("user missing");

        assert_eq!(error.code(), ErrorCode::NotFound);
    }
}
