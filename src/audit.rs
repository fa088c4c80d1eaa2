use serde_json::Value;
use uuid::Uuid;

use crate::{db::DbPool, error::AppResult};

/// Everything this service records about itself. The action carries its
/// resource so call sites cannot mislabel a product mutation as a user event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    ProductoCrear,
    ProductoActualizar,
    ProductoBorrar,
    UsuarioRegistrar,
    UsuarioLogin,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::ProductoCrear => "producto_crear",
            AuditAction::ProductoActualizar => "producto_actualizar",
            AuditAction::ProductoBorrar => "producto_borrar",
            AuditAction::UsuarioRegistrar => "usuario_registrar",
            AuditAction::UsuarioLogin => "usuario_login",
        }
    }

    pub fn resource(&self) -> &'static str {
        match self {
            AuditAction::ProductoCrear
            | AuditAction::ProductoActualizar
            | AuditAction::ProductoBorrar => "productos",
            AuditAction::UsuarioRegistrar | AuditAction::UsuarioLogin => "usuarios",
        }
    }
}

/// Append an audit row. Callers treat failures as non-fatal and only warn.
pub async fn log_audit(
    pool: &DbPool,
    usuario_id: Option<Uuid>,
    action: AuditAction,
    metadata: Option<Value>,
) -> AppResult<()> {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO audit_logs (id, usuario_id, action, resource, metadata)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(id)
    .bind(usuario_id)
    .bind(action.as_str())
    .bind(action.resource())
    .bind(metadata)
    .execute(pool)
    .await?;

    Ok(())
}
