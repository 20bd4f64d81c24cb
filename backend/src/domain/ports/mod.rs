//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod product_repository;
mod products_command;
mod products_query;
mod user_directory;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::{ProductRepository, ProductRepositoryError};
pub use products_command::ProductsCommand;
pub use products_query::ProductsQuery;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{UserDirectory, UserDirectoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
pub use users_command::UsersCommand;
pub use users_query::UsersQuery;
