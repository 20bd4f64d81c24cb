//! Product records and the enriched read model composed for single-item
//! lookups.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{UserId, UserSummary};

/// Store-assigned product identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i64, example = 1)]
pub struct ProductId(i64);

impl ProductId {
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

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Product record as stored by the products service.
///
/// `owner_user_id` is fixed at creation; updates only touch `name` and
/// `price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier.
    pub id: ProductId,
    /// Product name.
    #[schema(example = "Walnut desk")]
    pub name: String,
    /// Unit price.
    #[schema(example = 249.5)]
    pub price: f64,
    /// Identifier of the owning user in the users service.
    pub owner_user_id: UserId,
}

impl Product {
    /// Materialise a draft under the identifier the store assigned.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        let ProductDraft {
            name,
            price,
            owner_user_id,
        } = draft;
        Self {
            id,
            name,
            price,
            owner_user_id,
        }
    }

    /// Overwrite `name` and `price` with the patch values.
    pub fn apply(&mut self, patch: ProductPatch) {
        self.name = patch.name;
        self.price = patch.price;
    }
}

/// Fields supplied when creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Owning user; not checked against the users service.
    pub owner_user_id: UserId,
}

/// Fields replaced by an update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPatch {
    /// New product name.
    pub name: String,
    /// New unit price.
    pub price: f64,
}

/// A product joined with its owner as reported by the users service.
///
/// Only built after the product was found in the local store, so it never
/// points at a product that did not exist at composition time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedProductView {
    /// The stored product, unchanged.
    pub product: Product,
    /// The owner fetched from the users service, unchanged.
    pub user: UserSummary,
}
