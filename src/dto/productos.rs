use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Producto, ProductoBusquedaView, ProductoView};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrearProductoRequest {
    pub nombre: String,
    pub precio_uni: f64,
    pub descripcion: Option<String>,
    pub disponible: Option<bool>,
    pub categoria: Uuid,
}

/// Full overwrite, not a patch: every field here replaces the stored value.
/// `descripcion` is the only nullable column, so omitting it clears the
/// stored description.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActualizarProductoRequest {
    pub nombre: String,
    pub precio_uni: f64,
    pub categoria: Uuid,
    pub disponible: bool,
    pub descripcion: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductosResponse {
    pub ok: bool,
    pub productos: Vec<ProductoView>,
    pub cuantos: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductoResponse {
    pub ok: bool,
    #[serde(rename = "productoDB")]
    pub producto_db: ProductoView,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BusquedaResponse {
    pub ok: bool,
    pub productos: Vec<ProductoBusquedaView>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductoCreadoResponse {
    pub ok: bool,
    #[serde(rename = "productoDB")]
    pub producto_db: Producto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductoGuardadoResponse {
    pub ok: bool,
    #[serde(rename = "productoGuardado")]
    pub producto_guardado: Producto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductoBorradoResponse {
    pub ok: bool,
    #[serde(rename = "productoBorrado")]
    pub producto_borrado: Producto,
    pub mensaje: String,
}
