use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Persisted product shape: `categoria` and `usuario` are raw references.
/// Returned by the mutation routes (create/update/delete).
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Producto {
    pub id: Uuid,
    pub nombre: String,
    pub precio_uni: f64,
    pub descripcion: Option<String>,
    pub disponible: bool,
    pub categoria: Uuid,
    pub usuario: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Composed read model for list and get: references expanded to the
/// selected fields only (nombre/email for usuario, descripcion for
/// categoria), distinct from the persisted shape.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductoView {
    pub id: Uuid,
    pub nombre: String,
    pub precio_uni: f64,
    pub descripcion: Option<String>,
    pub disponible: bool,
    pub categoria: Option<CategoriaResumen>,
    pub usuario: Option<UsuarioResumen>,
    pub created_at: DateTime<Utc>,
}

/// Read model for search: only the categoria reference is expanded.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductoBusquedaView {
    pub id: Uuid,
    pub nombre: String,
    pub precio_uni: f64,
    pub descripcion: Option<String>,
    pub disponible: bool,
    pub categoria: Option<CategoriaResumen>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsuarioResumen {
    pub nombre: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoriaResumen {
    pub descripcion: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: Uuid,
    pub nombre: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
