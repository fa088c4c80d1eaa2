use cafe_productos_api::{
    config::AppConfig,
    db::{create_orm_conn, create_pool, run_migrations},
    entity::{categorias::ActiveModel as CategoriaActive, usuarios::ActiveModel as UsuarioActive},
    state::AppState,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set, Statement};
use uuid::Uuid;

/// Returns the test database URL, or None when the environment has none
/// configured (callers skip the test in that case).
pub fn test_database_url() -> Option<String> {
    std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
}

pub async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let orm = create_orm_conn(database_url).await?;
    let pool = create_pool(database_url).await?;
    run_migrations(&orm).await?;

    // Clean tables between runs.
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE audit_logs, productos, categorias, usuarios RESTART IDENTITY CASCADE",
    ))
    .await?;

    let config = AppConfig {
        database_url: database_url.to_string(),
        host: "127.0.0.1".into(),
        port: 0,
        jwt_secret: "test-seed".into(),
        token_ttl_hours: 48,
    };

    Ok(AppState { pool, orm, config })
}

pub async fn create_usuario(state: &AppState, nombre: &str, email: &str) -> anyhow::Result<Uuid> {
    let usuario = UsuarioActive {
        id: Set(Uuid::new_v4()),
        nombre: Set(nombre.to_string()),
        email: Set(email.to_string()),
        password_hash: Set("dummy".into()),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(usuario.id)
}

pub async fn create_categoria(
    state: &AppState,
    descripcion: &str,
    usuario_id: Uuid,
) -> anyhow::Result<Uuid> {
    let categoria = CategoriaActive {
        id: Set(Uuid::new_v4()),
        descripcion: Set(descripcion.to_string()),
        usuario_id: Set(usuario_id),
        created_at: NotSet,
    }
    .insert(&state.orm)
    .await?;

    Ok(categoria.id)
}
