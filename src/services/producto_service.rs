use anyhow::anyhow;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::{AuditAction, log_audit},
    dto::productos::{
        ActualizarProductoRequest, BusquedaResponse, CrearProductoRequest, ProductoBorradoResponse,
        ProductoCreadoResponse, ProductoGuardadoResponse, ProductoResponse, ProductosResponse,
    },
    entity::{Categorias, Productos, Usuarios, categorias, productos, usuarios},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{CategoriaResumen, Producto, ProductoBusquedaView, ProductoView, UsuarioResumen},
    routes::params::Paginacion,
    state::AppState,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, LoaderTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

/// Available products, sorted by name, paginated, with usuario and categoria
/// expanded. The count is a second, independent read: the two are not
/// guaranteed to be mutually consistent.
pub async fn listar_productos(
    state: &AppState,
    paginacion: Paginacion,
) -> AppResult<ProductosResponse> {
    let (desde, limite) = paginacion.resolver();

    let modelos = Productos::find()
        .filter(productos::Column::Disponible.eq(true))
        .order_by_asc(productos::Column::Nombre)
        .offset(desde)
        .limit(limite)
        .all(&state.orm)
        .await?;

    let cuantos = Productos::find()
        .filter(productos::Column::Disponible.eq(true))
        .count(&state.orm)
        .await?;

    let duenos = modelos.load_one(Usuarios, &state.orm).await?;
    let categorias = modelos.load_one(Categorias, &state.orm).await?;

    let productos = modelos
        .into_iter()
        .zip(duenos)
        .zip(categorias)
        .map(|((p, u), c)| vista_from_entities(p, u, c))
        .collect();

    Ok(ProductosResponse {
        ok: true,
        productos,
        cuantos,
    })
}

pub async fn obtener_producto(state: &AppState, id: &str) -> AppResult<ProductoResponse> {
    let id = parse_id(id)?;
    let producto = Productos::find_by_id(id).one(&state.orm).await?;
    let producto = match producto {
        Some(p) => p,
        None => return Err(AppError::BadRequest("product not found".into())),
    };

    if !producto.disponible {
        return Err(AppError::BadRequest("product not available".into()));
    }

    let dueno = producto.find_related(Usuarios).one(&state.orm).await?;
    let categoria = producto.find_related(Categorias).one(&state.orm).await?;

    Ok(ProductoResponse {
        ok: true,
        producto_db: vista_from_entities(producto, dueno, categoria),
    })
}

/// Case-insensitive substring match on nombre. The term goes into the
/// pattern as-is, and unlike list/get there is no disponible filter.
pub async fn buscar_productos(state: &AppState, termino: &str) -> AppResult<BusquedaResponse> {
    let pattern = format!("%{termino}%");
    let modelos = Productos::find()
        .filter(Expr::col(productos::Column::Nombre).ilike(pattern))
        .all(&state.orm)
        .await?;

    let categorias = modelos.load_one(Categorias, &state.orm).await?;

    let productos = modelos
        .into_iter()
        .zip(categorias)
        .map(|(p, c)| busqueda_from_entities(p, c))
        .collect();

    Ok(BusquedaResponse {
        ok: true,
        productos,
    })
}

pub async fn crear_producto(
    state: &AppState,
    user: &AuthUser,
    payload: CrearProductoRequest,
) -> AppResult<ProductoCreadoResponse> {
    let activo = productos::ActiveModel {
        id: Set(Uuid::new_v4()),
        nombre: Set(payload.nombre),
        precio_uni: Set(payload.precio_uni),
        descripcion: Set(payload.descripcion),
        disponible: Set(payload.disponible.unwrap_or(true)),
        categoria_id: Set(payload.categoria),
        // The owner comes from the token, never from the body.
        usuario_id: Set(user.usuario_id),
        created_at: NotSet,
    };
    let producto = activo.insert(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.usuario_id),
        AuditAction::ProductoCrear,
        Some(serde_json::json!({ "producto_id": producto.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ProductoCreadoResponse {
        ok: true,
        producto_db: producto_from_entity(producto),
    })
}

/// Full overwrite of the five mutable fields. An omitted descripcion nulls
/// the stored value; usuario_id is never touched.
pub async fn actualizar_producto(
    state: &AppState,
    user: &AuthUser,
    id: &str,
    payload: ActualizarProductoRequest,
) -> AppResult<ProductoGuardadoResponse> {
    let id = parse_id(id)?;
    let existente = Productos::find_by_id(id).one(&state.orm).await?;
    let existente = match existente {
        Some(p) => p,
        None => return Err(AppError::BadRequest("product not found".into())),
    };

    let mut activo: productos::ActiveModel = existente.into();
    activo.nombre = Set(payload.nombre);
    activo.precio_uni = Set(payload.precio_uni);
    activo.categoria_id = Set(payload.categoria);
    activo.disponible = Set(payload.disponible);
    activo.descripcion = Set(payload.descripcion);

    let guardado = activo.update(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.usuario_id),
        AuditAction::ProductoActualizar,
        Some(serde_json::json!({ "producto_id": guardado.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ProductoGuardadoResponse {
        ok: true,
        producto_guardado: producto_from_entity(guardado),
    })
}

/// Soft delete: flips disponible to false and keeps the row. Repeating it
/// on an already-unavailable product still succeeds.
pub async fn borrar_producto(
    state: &AppState,
    user: &AuthUser,
    id: &str,
) -> AppResult<ProductoBorradoResponse> {
    let id = parse_id(id)?;
    let existente = Productos::find_by_id(id).one(&state.orm).await?;
    let existente = match existente {
        Some(p) => p,
        None => return Err(AppError::BadRequest("product does not exist".into())),
    };

    let mut activo: productos::ActiveModel = existente.into();
    activo.disponible = Set(false);
    let borrado = activo.update(&state.orm).await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(user.usuario_id),
        AuditAction::ProductoBorrar,
        Some(serde_json::json!({ "producto_id": borrado.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(ProductoBorradoResponse {
        ok: true,
        producto_borrado: producto_from_entity(borrado),
        mensaje: "product deleted".into(),
    })
}

// A malformed id is a store-level failure, not a bad request: the original
// backend handed the raw value to the store and surfaced its error as 500.
fn parse_id(id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(id).map_err(|e| AppError::Internal(anyhow!("invalid product id: {e}")))
}

fn producto_from_entity(model: productos::Model) -> Producto {
    Producto {
        id: model.id,
        nombre: model.nombre,
        precio_uni: model.precio_uni,
        descripcion: model.descripcion,
        disponible: model.disponible,
        categoria: model.categoria_id,
        usuario: model.usuario_id,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn vista_from_entities(
    model: productos::Model,
    usuario: Option<usuarios::Model>,
    categoria: Option<categorias::Model>,
) -> ProductoView {
    ProductoView {
        id: model.id,
        nombre: model.nombre,
        precio_uni: model.precio_uni,
        descripcion: model.descripcion,
        disponible: model.disponible,
        categoria: categoria.map(|c| CategoriaResumen {
            descripcion: c.descripcion,
        }),
        usuario: usuario.map(|u| UsuarioResumen {
            nombre: u.nombre,
            email: u.email,
        }),
        created_at: model.created_at.with_timezone(&Utc),
    }
}

fn busqueda_from_entities(
    model: productos::Model,
    categoria: Option<categorias::Model>,
) -> ProductoBusquedaView {
    ProductoBusquedaView {
        id: model.id,
        nombre: model.nombre,
        precio_uni: model.precio_uni,
        descripcion: model.descripcion,
        disponible: model.disponible,
        categoria: categoria.map(|c| CategoriaResumen {
            descripcion: c.descripcion,
        }),
        created_at: model.created_at.with_timezone(&Utc),
    }
}
