//! In-memory adapter for the product store port.

use crate::domain::ports::{ProductRepository, ProductRepositoryError};
use crate::domain::{Product, ProductDraft, ProductId, ProductPatch};

use super::memory_table::{MemoryTable, TablePoisoned};

fn map_table_error(error: TablePoisoned) -> ProductRepositoryError {
    ProductRepositoryError::storage(error.to_string())
}

/// Product table held in process memory.
///
/// Contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryProductRepository {
    table: MemoryTable<Product>,
}

impl InMemoryProductRepository {
    /// Create an empty product table.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn find_all(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        self.table.all().map_err(map_table_error)
    }

    fn save(&self, draft: ProductDraft) -> Result<Product, ProductRepositoryError> {
        self.table
            .insert_with(|id| Product::from_draft(ProductId::new(id), draft))
            .map_err(map_table_error)
    }

    fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        self.table.get(id.get()).map_err(map_table_error)
    }

    fn update(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Option<Product>, ProductRepositoryError> {
        self.table
            .modify(id.get(), |product| product.apply(patch))
            .map_err(map_table_error)
    }

    fn delete(&self, id: ProductId) -> Result<bool, ProductRepositoryError> {
        self.table.remove(id.get()).map_err(map_table_error)
    }
}
