//! Domain primitives, services and ports.
//!
//! Purpose: define the product and user records, the enriched product read
//! model, and the services that implement the driving ports. Everything here
//! is transport agnostic; HTTP concerns live in `inbound`, storage and the
//! users service client live in `outbound`.
//!
//! Public surface:
//! - Error / ErrorCode — domain error payload and stable category.
//! - Product, ProductDraft, ProductPatch, EnrichedProductView — product model.
//! - User, UserDraft, UserPatch, UserSummary — user model and remote projection.
//! - ProductService, UserService — driving port implementations.
//! - TraceId — request correlation identifier.

pub mod error;
pub mod ports;
pub mod product;
pub mod product_service;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::product::{EnrichedProductView, Product, ProductDraft, ProductId, ProductPatch};
pub use self::product_service::ProductService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId, UserPatch, UserSummary};
pub use self::user_service::UserService;
