//! Driven port for the local product table.
//!
//! The contract is deliberately synchronous: every call blocks the calling
//! task until the store answers and is atomic with respect to one record.

use crate::domain::{Product, ProductDraft, ProductId, ProductPatch};

use super::define_port_error;

define_port_error! {
    /// Errors raised by product store adapters.
    pub enum ProductRepositoryError {
        /// The store could not complete the operation.
        Storage { message: String } => "product store failed: {message}",
    }
}

/// Record store for products.
#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    /// Return every stored product in ascending identifier order.
    fn find_all(&self) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Persist a new product and return it with its assigned identifier.
    fn save(&self, draft: ProductDraft) -> Result<Product, ProductRepositoryError>;

    /// Fetch a product by identifier.
    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductRepositoryError>;

    /// Apply `patch` to the stored product, returning the updated record, or
    /// `None` when no product has that identifier.
    fn update(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, ProductRepositoryError>;

    /// Remove a product. Returns `true` when a record was removed.
    fn delete(&self, id: ProductId) -> Result<bool, ProductRepositoryError>;
}
