use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} is not a valid access level")]
    InvalidAccessLevel(String),
    #[error("user {0} already exists")]
    UserAlreadyExists(String),
    #[error("user {0} does not exist")]
    UserNotFound(String),
}

#[derive(Serialize)]
struct ErrorBody<'a, 'b> {
    status: &'a str,
    message: &'b str,
}

impl AppError {
    /// Wire-level error code, part of the response contract.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidAccessLevel(_) => "invalidAccess",
            Self::UserAlreadyExists(_) => "userExists",
            Self::UserNotFound(_) => "userNotExists",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidAccessLevel(_) => StatusCode::BAD_REQUEST,
            Self::UserAlreadyExists(_) => StatusCode::CONFLICT,
            Self::UserNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        HttpResponse::build(self.status_code()).json(ErrorBody {
            status: self.code(),
            message: &message,
        })
    }
}
