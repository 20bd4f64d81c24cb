//! Record store adapters.
//!
//! Both services keep their single-entity table in process memory behind the
//! synchronous repository ports. The engine is swappable: a database-backed
//! adapter only has to implement the same port traits.

mod memory_product_repository;
mod memory_table;
mod memory_user_repository;

pub use memory_product_repository::InMemoryProductRepository;
pub use memory_table::TablePoisoned;
pub use memory_user_repository::InMemoryUserRepository;
