use crate::types::error::AppError;
use actix_web::{HttpResponse, Responder};
use serde::Serialize;

#[derive(Serialize)]
struct Envelope<T> {
    status: &'static str,
    #[serde(flatten)]
    body: Option<T>,
}

pub enum ApiResponse<T> {
    Ok(T),
    EmptyOk,
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(Envelope {
                status: "success",
                body: Some(v),
            }),
            ApiResponse::EmptyOk => HttpResponse::Ok().json(Envelope::<T> {
                status: "success",
                body: None,
            }),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
