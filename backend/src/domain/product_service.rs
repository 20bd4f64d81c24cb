//! Product domain service.
//!
//! Implements the product driving ports. Reads and writes are pass-throughs to
//! the local store except [`ProductsQuery::get_enriched_product`], which runs
//! the two-stage enrichment: a blocking store lookup, then (only when the
//! product exists) one suspended call to the users service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    ProductRepository, ProductRepositoryError, ProductsCommand, ProductsQuery, UserDirectory,
};
use crate::domain::{
    EnrichedProductView, Error, Product, ProductDraft, ProductId, ProductPatch, UserId, UserSummary,
};

fn map_repository_error(error: ProductRepositoryError) -> Error {
    match error {
        ProductRepositoryError::Storage { message } => {
            Error::internal(format!("product store error: {message}"))
        }
    }
}

fn product_not_found(id: ProductId) -> Error {
    Error::not_found(format!("product {id} not found"))
}

/// Product service implementing [`ProductsQuery`] and [`ProductsCommand`].
#[derive(Clone)]
pub struct ProductService<R, D> {
    products: Arc<R>,
    users: Arc<D>,
}

impl<R, D> ProductService<R, D> {
    /// Create a service over the product store and the users service client.
    pub fn new(products: Arc<R>, users: Arc<D>) -> Self {
        Self { products, users }
    }
}

impl<R, D> ProductService<R, D>
where
    R: ProductRepository,
    D: UserDirectory,
{
    fn find_product(&self, id: ProductId) -> Result<Product, Error> {
        self.products
            .find_by_id(id)
            .map_err(map_repository_error)?
            .ok_or_else(|| product_not_found(id))
    }

    async fn fetch_owner(
        &self,
        product_id: ProductId,
        owner: UserId,
    ) -> Result<UserSummary, Error> {
        debug!(%product_id, user_id = %owner, "fetching product owner");
        self.users.fetch_user(owner).await.map_err(|error| {
            warn!(%product_id, user_id = %owner, %error, "product owner lookup failed");
            Error::upstream_unavailable("users service unavailable")
        })
    }
}

#[async_trait]
impl<R, D> ProductsQuery for ProductService<R, D>
where
    R: ProductRepository,
    D: UserDirectory,
{
    async fn list_products(&self) -> Result<Vec<Product>, Error> {
        self.products.find_all().map_err(map_repository_error)
    }

    async fn get_enriched_product(&self, id: ProductId) -> Result<EnrichedProductView, Error> {
        let product = self.find_product(id)?;
        let user = self.fetch_owner(id, product.owner_user_id).await?;
        Ok(EnrichedProductView { product, user })
    }
}

#[async_trait]
impl<R, D> ProductsCommand for ProductService<R, D>
where
    R: ProductRepository,
    D: UserDirectory,
{
    async fn create_product(&self, draft: ProductDraft) -> Result<Product, Error> {
        let product = self.products.save(draft).map_err(map_repository_error)?;
        info!(product_id = %product.id, "product created");
        Ok(product)
    }

    async fn update_product(&self, id: ProductId, patch: ProductPatch) -> Result<Product, Error> {
        self.products
            .update(id, patch)
            .map_err(map_repository_error)?
            .ok_or_else(|| product_not_found(id))
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), Error> {
        if self.products.delete(id).map_err(map_repository_error)? {
            info!(product_id = %id, "product deleted");
            Ok(())
        } else {
            Err(product_not_found(id))
        }
    }
}

#[cfg(test)]
#[path = "product_service_tests.rs"]
mod tests;
