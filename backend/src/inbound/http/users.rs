//! User registry handlers.
//!
//! ```text
//! GET  /
//! GET  /name={name}
//! GET  /register?name=steve&level=3&itemCount=5
//! POST /register?name=steve&level=3&itemCount=5
//! ```

use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, get, web};
use serde::Deserialize;
use tracing::debug;
use user_data::{InventoryRecord, RegisterUserResult, UserRecord};

use crate::domain::User;
use crate::domain::ports::{RegisterResult, RegistrationRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Query string accepted by `/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterParams {
    pub name: String,
    pub level: u32,
    #[serde(rename = "itemCount")]
    pub item_count: i32,
}

impl From<RegisterParams> for RegistrationRequest {
    fn from(params: RegisterParams) -> Self {
        RegistrationRequest::new(params.name, params.level, i64::from(params.item_count))
    }
}

fn to_record(user: &User) -> UserRecord {
    UserRecord {
        name: user.name().to_string(),
        level: user.level().value(),
        inventory: user.inventory().map(|inventory| InventoryRecord {
            id: inventory.id().value(),
            items: inventory.items().map(str::to_owned),
        }),
    }
}

/// List every registered user in registration order.
#[get("/")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserRecord>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users.iter().map(to_record).collect()))
}

/// Fetch one user; answers `null` when the name is unknown.
#[get("/name={name}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    name: web::Path<String>,
) -> ApiResult<web::Json<Option<UserRecord>>> {
    let user = state.users.get_user(name.as_str()).await?;
    Ok(web::Json(user.as_ref().map(to_record)))
}

/// Register a user with a freshly generated inventory.
pub async fn register_user(
    state: web::Data<HttpState>,
    params: web::Query<RegisterParams>,
) -> HttpResponse {
    let result = state
        .registration
        .register(params.into_inner().into())
        .await;
    match result {
        RegisterResult::Success => HttpResponse::Ok().json(RegisterUserResult::Success),
        RegisterResult::InvalidData => {
            HttpResponse::BadRequest().json(RegisterUserResult::NotValidData)
        }
        RegisterResult::DuplicateName => {
            HttpResponse::Conflict().json(RegisterUserResult::DuplicatedName)
        }
        RegisterResult::InternalFailure => HttpResponse::InternalServerError().finish(),
    }
}

fn invalid_query(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejected malformed query string");
    InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(RegisterUserResult::NotValidData),
    )
    .into()
}

/// Mount the user routes.
///
/// Malformed or missing query parameters answer 400 `"NotValidData"`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use inventory_backend::inbound::http::users;
///
/// let _app = App::new().configure(users::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(invalid_query))
        .service(list_users)
        .service(get_user)
        .service(
            web::resource("/register")
                .route(web::get().to(register_user))
                .route(web::post().to(register_user)),
        );
}
