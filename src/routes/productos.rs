use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    dto::productos::{
        ActualizarProductoRequest, BusquedaResponse, CrearProductoRequest,
        ProductoBorradoResponse, ProductoCreadoResponse, ProductoGuardadoResponse,
        ProductoResponse, ProductosResponse,
    },
    error::AppResult,
    middleware::auth::AuthUser,
    routes::params::Paginacion,
    services::producto_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::get(listar_productos))
        .route("/", axum::routing::post(crear_producto))
        .route("/{id}", axum::routing::get(obtener_producto))
        .route("/{id}", axum::routing::put(actualizar_producto))
        .route("/{id}", axum::routing::delete(borrar_producto))
        .route("/buscar/{termino}", axum::routing::get(buscar_productos))
}

#[utoipa::path(
    get,
    path = "/productos",
    params(
        ("desde" = Option<u64>, Query, description = "Offset, default 0"),
        ("limite" = Option<u64>, Query, description = "Page size, default 5"),
    ),
    responses(
        (status = 200, description = "Available products with owner and category expanded", body = ProductosResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Productos"
)]
pub async fn listar_productos(
    _user: AuthUser,
    State(state): State<AppState>,
    Query(paginacion): Query<Paginacion>,
) -> AppResult<Json<ProductosResponse>> {
    let resp = producto_service::listar_productos(&state, paginacion).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/productos/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product with owner and category expanded", body = ProductoResponse),
        (status = 400, description = "Product missing or not available"),
    ),
    security(("bearer_auth" = [])),
    tag = "Productos"
)]
pub async fn obtener_producto(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductoResponse>> {
    let resp = producto_service::obtener_producto(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/productos/buscar/{termino}",
    params(
        ("termino" = String, Path, description = "Substring matched case-insensitively against nombre")
    ),
    responses(
        (status = 200, description = "Matching products, category expanded", body = BusquedaResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Productos"
)]
pub async fn buscar_productos(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(termino): Path<String>,
) -> AppResult<Json<BusquedaResponse>> {
    let resp = producto_service::buscar_productos(&state, &termino).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/productos",
    request_body = CrearProductoRequest,
    responses(
        (status = 201, description = "Created product, owned by the caller", body = ProductoCreadoResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Productos"
)]
pub async fn crear_producto(
    user: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CrearProductoRequest>,
) -> AppResult<(StatusCode, Json<ProductoCreadoResponse>)> {
    let resp = producto_service::crear_producto(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/productos/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = ActualizarProductoRequest,
    responses(
        (status = 200, description = "Overwritten product", body = ProductoGuardadoResponse),
        (status = 400, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Productos"
)]
pub async fn actualizar_producto(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ActualizarProductoRequest>,
) -> AppResult<Json<ProductoGuardadoResponse>> {
    let resp = producto_service::actualizar_producto(&state, &user, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/productos/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Soft-deleted product", body = ProductoBorradoResponse),
        (status = 400, description = "Product does not exist"),
    ),
    security(("bearer_auth" = [])),
    tag = "Productos"
)]
pub async fn borrar_producto(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductoBorradoResponse>> {
    let resp = producto_service::borrar_producto(&state, &user, &id).await?;
    Ok(Json(resp))
}
