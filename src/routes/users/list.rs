use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::directory::UserDirectory;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRecord;

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub users: Vec<UserRecord>,
}

#[get("")]
async fn list(
    _req: actix_web::HttpRequest,
    dir: web::Data<Arc<UserDirectory>>,
) -> ApiResult<Response> {
    let users = dir.list().await;
    Ok(ApiResponse::Ok(Response { users }))
}
