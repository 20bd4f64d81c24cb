//! Users API handlers served by the users service.
//!
//! ```text
//! GET    /api/users
//! POST   /api/users       {"name":"Ada","email":"ada@example.com"}
//! GET    /api/users/{id}
//! PUT    /api/users/{id}  {"name":"Ada L.","email":"ada@example.com"}
//! DELETE /api/users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, User, UserDraft, UserId, UserPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::UsersState;

/// Request body for creating or replacing a user.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl From<UserRequest> for UserDraft {
    fn from(value: UserRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
        }
    }
}

impl From<UserRequest> for UserPatch {
    fn from(value: UserRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
        }
    }
}

/// Register the user routes on a service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users)
        .service(create_user)
        .service(get_user)
        .service(update_user)
        .service(delete_user);
}

/// List every stored user.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<UsersState>) -> ApiResult<web::Json<Vec<User>>> {
    Ok(web::Json(state.users.list_users().await?))
}

/// Store a new user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid request", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<UsersState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let user = state
        .users_command
        .create_user(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(user))
}

/// Fetch one user. This is the lookup the products service calls during
/// enrichment.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<UsersState>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<User>> {
    let user = state.users.get_user(UserId::new(id.into_inner())).await?;
    Ok(web::Json(user))
}

/// Replace the name and email of a user.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<UsersState>,
    id: web::Path<i64>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<User>> {
    let user = state
        .users_command
        .update_user(UserId::new(id.into_inner()), payload.into_inner().into())
        .await?;
    Ok(web::Json(user))
}

/// Remove a user. Products owned by the user are left untouched.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<UsersState>,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .users_command
        .delete_user(UserId::new(id.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().finish())
}
