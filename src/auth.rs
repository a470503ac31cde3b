use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse};
use serde_json::json;

/// Identity of the caller, resolved from the session established by the
/// authentication collaborator. Handlers that take this extractor reject
/// unauthenticated requests with a `401` before any business logic runs.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub id: i32,
}

fn unauthorized() -> Error {
    let body = HttpResponse::Unauthorized().json(json!({
        "success": false,
        "error": "unauthorized",
        "message": "Authentication required",
    }));
    InternalError::from_response("authentication required", body).into()
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity = match Identity::from_request(req, payload).into_inner() {
            Ok(identity) => identity,
            Err(_) => return ready(Err(unauthorized())),
        };

        match identity.id().ok().and_then(|id| id.parse::<i32>().ok()) {
            Some(id) => ready(Ok(AuthenticatedUser { id })),
            None => ready(Err(unauthorized())),
        }
    }
}
