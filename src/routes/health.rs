use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub ok: bool,
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = HealthData),
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthData> {
    Json(HealthData {
        ok: true,
        status: "ok".to_string(),
    })
}
