use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::directory::UserDirectory;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RUserEmail;

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[post("/revoke")]
async fn revoke_access(
    _req: actix_web::HttpRequest,
    dir: web::Data<Arc<UserDirectory>>,
    body: web::Json<RUserEmail>,
) -> ApiResult<Response> {
    dir.revoke_access(&body.email).await?;

    Ok(ApiResponse::EmptyOk)
}
