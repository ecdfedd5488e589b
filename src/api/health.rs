use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::services::UsersScreenService;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Users currently in the store
    pub users: Option<usize>,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "User store unavailable", body = HealthResponse)
    )
)]
pub async fn health_check(service: web::Data<UsersScreenService>) -> impl Responder {
    let (status, users) = match service.user_count().await {
        Ok(count) => ("healthy", Some(count)),
        Err(e) => {
            log::error!("❌ Health check failed to count users: {}", e);
            ("unhealthy", None)
        }
    };

    let body = HealthResponse {
        status: status.to_string(),
        service: "users-admin".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        users,
        timestamp: chrono::Utc::now().timestamp(),
    };

    if users.is_some() {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
