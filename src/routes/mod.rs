use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::json;

use crate::services::ServiceError;

pub mod orders;

/// Success envelope shared by all endpoints.
pub(crate) fn success_body<T: Serialize>(message: &str, data: T) -> serde_json::Value {
    json!({
        "success": true,
        "message": message,
        "data": data,
    })
}

/// Translate a service failure into its HTTP response. Business-rule
/// failures keep their machine-readable code; internal failures are logged
/// and reduced to a generic body.
pub(crate) fn error_response(err: &ServiceError) -> HttpResponse {
    let body = json!({
        "success": false,
        "error": err.code(),
        "message": err.to_string(),
    });

    match err {
        ServiceError::Validation(_)
        | ServiceError::InvalidDateRange
        | ServiceError::AddressRequired
        | ServiceError::MinimumRentalDuration => HttpResponse::BadRequest().json(body),
        ServiceError::ProductNotFound | ServiceError::NotFound => {
            HttpResponse::NotFound().json(body)
        }
        ServiceError::InsufficientStock { .. } => HttpResponse::Conflict().json(body),
        ServiceError::Internal(source) => {
            log::error!("request failed: {source}");
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": "internal_error",
                "message": "Internal server error",
            }))
        }
    }
}
