//! Shared HTTP adapter state.
//!
//! Handlers accept these bundles via `actix_web::web::Data` so they only
//! depend on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ProductsCommand, ProductsQuery, UsersCommand, UsersQuery};

/// Dependency bundle for the products service handlers.
#[derive(Clone)]
pub struct ProductsState {
    pub products: Arc<dyn ProductsQuery>,
    pub products_command: Arc<dyn ProductsCommand>,
}

impl ProductsState {
    /// Bundle the product read and write ports.
    pub fn new(
        products: Arc<dyn ProductsQuery>,
        products_command: Arc<dyn ProductsCommand>,
    ) -> Self {
        Self {
            products,
            products_command,
        }
    }
}

/// Dependency bundle for the users service handlers.
#[derive(Clone)]
pub struct UsersState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
}

impl UsersState {
    /// Bundle the user read and write ports.
    pub fn new(users: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users,
            users_command,
        }
    }
}
