//! Driving port for product reads.
//!
//! HTTP handlers depend on this port rather than on the store or the users
//! service client, so they stay testable without I/O.

use async_trait::async_trait;

use crate::domain::{EnrichedProductView, Error, Product, ProductId};

/// Product read use-cases.
#[async_trait]
pub trait ProductsQuery: Send + Sync {
    /// Return every product.
    async fn list_products(&self) -> Result<Vec<Product>, Error>;

    /// Return one product joined with its owner from the users service.
    ///
    /// Fails with `not_found` when the product is absent (the users service
    /// is not contacted) and with `upstream_unavailable` when the owner
    /// lookup fails for any reason.
    async fn get_enriched_product(&self, id: ProductId) -> Result<EnrichedProductView, Error>;
}
