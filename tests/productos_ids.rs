mod common;

use cafe_productos_api::{
    dto::productos::ActualizarProductoRequest, error::AppError, middleware::auth::AuthUser,
    services::producto_service,
};
use uuid::Uuid;

// Missing ids are business rejections (400 with a message); a malformed id
// is a store-level failure and surfaces as 500.
#[tokio::test]
async fn missing_and_malformed_ids_are_rejected() -> anyhow::Result<()> {
    let database_url = match common::test_database_url() {
        Some(url) => url,
        None => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let state = common::setup_state(&database_url).await?;
    let u1 = common::create_usuario(&state, "Usuario Uno", "u1@example.com").await?;
    let c1 = common::create_categoria(&state, "Bebidas", u1).await?;
    let caller = AuthUser { usuario_id: u1 };

    let ausente = Uuid::new_v4().to_string();

    let err = producto_service::obtener_producto(&state, &ausente)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref m) if m == "product not found"));

    let err = producto_service::actualizar_producto(
        &state,
        &caller,
        &ausente,
        ActualizarProductoRequest {
            nombre: "Nada".into(),
            precio_uni: 1.0,
            categoria: c1,
            disponible: true,
            descripcion: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref m) if m == "product not found"));

    let err = producto_service::borrar_producto(&state, &caller, &ausente)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref m) if m == "product does not exist"));

    let err = producto_service::obtener_producto(&state, "not-a-uuid")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Internal(_)));

    Ok(())
}
