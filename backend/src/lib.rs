//! Storefront services: a products service that enriches products with
//! owner details fetched from a separate users service.
//!
//! The crate follows a hexagonal layout: `domain` holds records, ports and
//! services; `inbound` adapts HTTP to the driving ports; `outbound` provides
//! the in-memory stores and the users service client; `server` wires both
//! binaries together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use doc::{ProductsApiDoc, UsersApiDoc};
pub use middleware::Trace;
