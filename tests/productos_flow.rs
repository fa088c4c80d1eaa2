mod common;

use cafe_productos_api::{
    dto::productos::CrearProductoRequest, error::AppError, middleware::auth::AuthUser,
    routes::params::Paginacion, services::producto_service,
};

// Integration flow from the product contract: create as U1 -> get with
// expanded categoria -> soft delete -> get rejects -> list excludes.
#[tokio::test]
async fn create_get_delete_and_list_flow() -> anyhow::Result<()> {
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

    // Create: owner comes from the token, disponible defaults to true.
    let creado = producto_service::crear_producto(
        &state,
        &caller,
        CrearProductoRequest {
            nombre: "Coffee".into(),
            precio_uni: 5.0,
            descripcion: Some("House blend".into()),
            disponible: None,
            categoria: c1,
        },
    )
    .await?;
    let producto = creado.producto_db;
    assert!(creado.ok);
    assert_eq!(producto.usuario, u1);
    assert!(producto.disponible);

    let id = producto.id.to_string();

    // Get: references expanded to the selected fields.
    let obtenido = producto_service::obtener_producto(&state, &id).await?;
    let vista = obtenido.producto_db;
    assert_eq!(vista.categoria.as_ref().unwrap().descripcion, "Bebidas");
    let dueno = vista.usuario.as_ref().unwrap();
    assert_eq!(dueno.email, "u1@example.com");
    assert_eq!(dueno.nombre, "Usuario Uno");

    // Search is case-insensitive on a substring of nombre.
    let busqueda = producto_service::buscar_productos(&state, "cof").await?;
    assert_eq!(busqueda.productos.len(), 1);
    assert_eq!(
        busqueda.productos[0].categoria.as_ref().unwrap().descripcion,
        "Bebidas"
    );

    // List includes it and counts it.
    let listado = producto_service::listar_productos(&state, Paginacion::default()).await?;
    assert_eq!(listado.cuantos, 1);
    assert!(listado.productos.iter().any(|p| p.id == producto.id));

    // Soft delete flips disponible and keeps the row.
    let borrado = producto_service::borrar_producto(&state, &caller, &id).await?;
    assert!(!borrado.producto_borrado.disponible);
    assert_eq!(borrado.mensaje, "product deleted");

    // Repeating the delete still succeeds.
    let repetido = producto_service::borrar_producto(&state, &caller, &id).await?;
    assert!(!repetido.producto_borrado.disponible);

    // Get now rejects the soft-deleted product.
    let err = producto_service::obtener_producto(&state, &id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(ref m) if m == "product not available"));

    // List excludes it and the count drops.
    let listado = producto_service::listar_productos(&state, Paginacion::default()).await?;
    assert_eq!(listado.cuantos, 0);
    assert!(listado.productos.is_empty());

    // Search applies no disponible filter, so it still finds the row.
    let busqueda = producto_service::buscar_productos(&state, "COFFEE").await?;
    assert_eq!(busqueda.productos.len(), 1);
    assert!(!busqueda.productos[0].disponible);

    Ok(())
}
