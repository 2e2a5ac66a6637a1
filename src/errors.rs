use actix_web::HttpResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound(_) => HttpResponse::NotFound().json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::CatalogUnavailable(_) => {
                HttpResponse::ServiceUnavailable().json(serde_json::json!({
                    "error": self.to_string()
                }))
            }
            AppError::Config(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error"
            })),
        }
    }
}
