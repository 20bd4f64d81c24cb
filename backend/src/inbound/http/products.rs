//! Products API handlers.
//!
//! ```text
//! GET    /api/products
//! POST   /api/products       {"name":"Desk","price":120.0,"ownerUserId":9}
//! GET    /api/products/{id}  -> {"product":{...},"user":{...}}
//! PUT    /api/products/{id}  {"name":"Desk","price":99.0}
//! DELETE /api/products/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    EnrichedProductView, Error, Product, ProductDraft, ProductId, ProductPatch, UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::ProductsState;

/// Request body for `POST /api/products`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[schema(example = "Walnut desk")]
    pub name: String,
    #[schema(example = 249.5)]
    pub price: f64,
    pub owner_user_id: UserId,
}

impl From<CreateProductRequest> for ProductDraft {
    fn from(value: CreateProductRequest) -> Self {
        Self {
            name: value.name,
            price: value.price,
            owner_user_id: value.owner_user_id,
        }
    }
}

/// Request body for `PUT /api/products/{id}`.
///
/// The owner cannot be changed after creation.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[schema(example = "Standing desk")]
    pub name: String,
    #[schema(example = 299.0)]
    pub price: f64,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(value: UpdateProductRequest) -> Self {
        Self {
            name: value.name,
            price: value.price,
        }
    }
}

/// Register the product routes on a service config.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use storefront::inbound::http::products;
///
/// let _app = App::new().service(web::scope("/api").configure(products::configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_products)
        .service(create_product)
        .service(get_product)
        .service(update_product)
        .service(delete_product);
}

/// List every stored product.
#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "Products", body = [Product]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/products")]
pub async fn list_products(
    state: web::Data<ProductsState>,
) -> ApiResult<web::Json<Vec<Product>>> {
    let products = state.products.list_products().await?;
    Ok(web::Json(products))
}

/// Store a new product.
#[utoipa::path(
    post,
    path = "/api/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["products"],
    operation_id = "createProduct"
)]
#[post("/products")]
pub async fn create_product(
    state: web::Data<ProductsState>,
    payload: web::Json<CreateProductRequest>,
) -> ApiResult<HttpResponse> {
    let product = state
        .products_command
        .create_product(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(product))
}

/// Fetch a product together with its owner from the users service.
///
/// A missing product answers 404 without contacting the users service. Any
/// owner lookup failure answers 502 with an empty body.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product with owner", body = EnrichedProductView),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Product not found", body = Error),
        (status = 502, description = "Users service unavailable")
    ),
    tags = ["products"],
    operation_id = "getProduct"
)]
#[get("/products/{id}")]
pub async fn get_product(
    state: web::Data<ProductsState>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<EnrichedProductView>> {
    let view = state
        .products
        .get_enriched_product(ProductId::new(id.into_inner()))
        .await?;
    Ok(web::Json(view))
}

/// Replace the name and price of a product.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product identifier")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Product not found", body = Error)
    ),
    tags = ["products"],
    operation_id = "updateProduct"
)]
#[put("/products/{id}")]
pub async fn update_product(
    state: web::Data<ProductsState>,
    id: web::Path<i64>,
    payload: web::Json<UpdateProductRequest>,
) -> ApiResult<web::Json<Product>> {
    let product = state
        .products_command
        .update_product(ProductId::new(id.into_inner()), payload.into_inner().into())
        .await?;
    Ok(web::Json(product))
}

/// Remove a product.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 404, description = "Product not found", body = Error)
    ),
    tags = ["products"],
    operation_id = "deleteProduct"
)]
#[delete("/products/{id}")]
pub async fn delete_product(
    state: web::Data<ProductsState>,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .products_command
        .delete_product(ProductId::new(id.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().finish())
}
