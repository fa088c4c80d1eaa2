use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{auth, productos},
    models::{
        CategoriaResumen, Producto, ProductoBusquedaView, ProductoView, Usuario, UsuarioResumen,
    },
    response::{ErrorDetail, ErrorEnvelope},
    routes::{auth as auth_routes, health, params, productos as producto_routes},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth_routes::login,
        auth_routes::register,
        producto_routes::listar_productos,
        producto_routes::obtener_producto,
        producto_routes::buscar_productos,
        producto_routes::crear_producto,
        producto_routes::actualizar_producto,
        producto_routes::borrar_producto,
    ),
    components(
        schemas(
            Producto,
            ProductoView,
            ProductoBusquedaView,
            UsuarioResumen,
            CategoriaResumen,
            Usuario,
            params::Paginacion,
            productos::CrearProductoRequest,
            productos::ActualizarProductoRequest,
            productos::ProductosResponse,
            productos::ProductoResponse,
            productos::BusquedaResponse,
            productos::ProductoCreadoResponse,
            productos::ProductoGuardadoResponse,
            productos::ProductoBorradoResponse,
            auth::RegisterRequest,
            auth::LoginRequest,
            auth::LoginResponse,
            auth::RegisterResponse,
            ErrorEnvelope,
            ErrorDetail,
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Productos", description = "Product endpoints"),
        (name = "Auth", description = "Authentication endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
