//! Driving port for product mutations.

use async_trait::async_trait;

use crate::domain::{Error, Product, ProductDraft, ProductId, ProductPatch};

/// Product write use-cases.
#[async_trait]
pub trait ProductsCommand: Send + Sync {
    /// Store a new product.
    async fn create_product(&self, draft: ProductDraft) -> Result<Product, Error>;

    /// Replace name and price of an existing product.
    async fn update_product(&self, id: ProductId, patch: ProductPatch) -> Result<Product, Error>;

    /// Remove a product.
    async fn delete_product(&self, id: ProductId) -> Result<(), Error>;
}
