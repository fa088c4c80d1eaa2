mod common;

use cafe_productos_api::{
    dto::productos::{ActualizarProductoRequest, CrearProductoRequest},
    middleware::auth::AuthUser,
    services::producto_service,
};

// Regression for the overwrite-not-patch contract: PUT replaces all five
// mutable fields, so an omitted descripcion clears the stored value.
#[tokio::test]
async fn update_overwrites_all_fields_and_keeps_owner() -> anyhow::Result<()> {
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
    let c2 = common::create_categoria(&state, "Postres", u1).await?;
    let caller = AuthUser { usuario_id: u1 };

    let creado = producto_service::crear_producto(
        &state,
        &caller,
        CrearProductoRequest {
            nombre: "Brownie".into(),
            precio_uni: 3.5,
            descripcion: Some("Con nueces".into()),
            disponible: Some(true),
            categoria: c1,
        },
    )
    .await?;
    let id = creado.producto_db.id.to_string();

    let guardado = producto_service::actualizar_producto(
        &state,
        &caller,
        &id,
        ActualizarProductoRequest {
            nombre: "Brownie doble".into(),
            precio_uni: 4.0,
            categoria: c2,
            disponible: true,
            descripcion: None,
        },
    )
    .await?;
    let actualizado = guardado.producto_guardado;
    assert_eq!(actualizado.nombre, "Brownie doble");
    assert_eq!(actualizado.precio_uni, 4.0);
    assert_eq!(actualizado.categoria, c2);
    assert_eq!(actualizado.descripcion, None);
    // The owner reference never changes after creation.
    assert_eq!(actualizado.usuario, u1);

    Ok(())
}
