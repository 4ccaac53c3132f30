use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

use crate::directory::UserDirectory;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{AccessLevel, RInviteUsers};

#[derive(Serialize, Deserialize)]
pub struct Response {}

#[post("/invite")]
async fn invite(
    _req: actix_web::HttpRequest,
    dir: web::Data<Arc<UserDirectory>>,
    body: web::Json<RInviteUsers>,
) -> ApiResult<Response> {
    // Parsed here rather than by serde so bad values come back as
    // invalidAccess in the normal failure envelope.
    let access_level: AccessLevel = match body.access_level.parse() {
        Ok(level) => level,
        Err(e) => {
            error!("rejected invite batch: {}", e);
            return Err(e);
        }
    };

    dir.invite(&body.emails, access_level).await?;

    Ok(ApiResponse::EmptyOk)
}
