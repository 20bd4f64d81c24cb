//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: in-process record tables behind the repository ports
//! - **users_service**: reqwest client behind the `UserDirectory` port
//!
//! Adapters translate between domain types and infrastructure representations
//! and contain no business logic.

pub mod persistence;
pub mod users_service;
