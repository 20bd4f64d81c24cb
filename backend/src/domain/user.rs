//! User records owned by the users service, and the read-only projection the
//! products service receives from it.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Store-assigned user identifier.
///
/// Products reference users through this identifier without checking that the
/// user exists, so a `UserId` held by the products service may dangle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i64, example = 1)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Return the raw identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// User record as stored by the users service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identifier.
    pub id: UserId,
    /// Display name.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Contact address.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl User {
    /// Materialise a draft under the identifier the store assigned.
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        let UserDraft { name, email } = draft;
        Self { id, name, email }
    }

    /// Overwrite the mutable fields with the patch values.
    pub fn apply(&mut self, patch: UserPatch) {
        self.name = patch.name;
        self.email = patch.email;
    }
}

/// Fields supplied when creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
}

/// Fields replaced by an update. Everything else is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPatch {
    /// New display name.
    pub name: String,
    /// New contact address.
    pub email: String,
}

/// Read-only projection of a remote user, fetched per enrichment call.
///
/// Never persisted or cached by the products service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Identifier of the remote user.
    pub id: UserId,
    /// Display name reported by the users service.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Contact address reported by the users service.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl From<User> for UserSummary {
    fn from(value: User) -> Self {
        let User { id, name, email } = value;
        Self { id, name, email }
    }
}
