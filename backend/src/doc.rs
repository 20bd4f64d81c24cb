//! OpenAPI documentation for both services.
//!
//! Each service publishes its own document: [`ProductsApiDoc`] for the
//! products service and [`UsersApiDoc`] for the users service. Swagger UI
//! serves them in debug builds, and `openapi-dump` prints either one.

use utoipa::OpenApi;

use crate::domain::{EnrichedProductView, Error, ErrorCode, Product, User, UserSummary};
use crate::inbound::http::products::{CreateProductRequest, UpdateProductRequest};
use crate::inbound::http::users::UserRequest;

/// OpenAPI document for the products service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products service API",
        description = "Product CRUD and owner-enriched product lookups."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::create_product,
        crate::inbound::http::products::get_product,
        crate::inbound::http::products::update_product,
        crate::inbound::http::products::delete_product,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Product,
        EnrichedProductView,
        UserSummary,
        CreateProductRequest,
        UpdateProductRequest,
        Error,
        ErrorCode
    )),
    tags(
        (name = "products", description = "Operations related to products"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ProductsApiDoc;

/// OpenAPI document for the users service.
#[derive(OpenApi)]
#[openapi(
    info(title = "Users service API", description = "User CRUD."),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, UserRequest, Error, ErrorCode)),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct UsersApiDoc;
