use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::directory::UserDirectory;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::RUserEmail;

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[post("/resend-invite")]
async fn resend_invite(
    _req: actix_web::HttpRequest,
    dir: web::Data<Arc<UserDirectory>>,
    body: web::Json<RUserEmail>,
) -> ApiResult<Response> {
    dir.resend_invite(&body.email).await?;

    Ok(ApiResponse::EmptyOk)
}
