use actix_web::{HttpRequest, HttpResponse};

use crate::error::ApiError;

/// Catch-all for unmatched routes and unsupported methods
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    log::debug!("No route for {} {}", req.method(), req.path());
    Err(ApiError::NotFound)
}
