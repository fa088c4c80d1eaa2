use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use cafe_productos_api::{config::AppConfig, db::create_pool};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    // Ensure migrations are applied.
    sqlx::migrate!("./migrations").run(&pool).await?;

    let usuario_id = ensure_usuario(&pool, "Dev User", "dev@example.com", "dev123").await?;
    let categoria_cafe = ensure_categoria(&pool, "Café", usuario_id).await?;
    let categoria_postres = ensure_categoria(&pool, "Postres", usuario_id).await?;
    seed_productos(&pool, usuario_id, categoria_cafe, categoria_postres).await?;

    println!("Seed completed. Usuario ID: {usuario_id}");
    Ok(())
}

async fn ensure_usuario(
    pool: &sqlx::PgPool,
    nombre: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<Uuid> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let row: Option<(Uuid,)> = sqlx::query_as(
        r#"
        INSERT INTO usuarios (id, nombre, email, password_hash)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (email) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(nombre)
    .bind(email)
    .bind(password_hash)
    .fetch_optional(pool)
    .await?;

    // If the usuario already exists, fetch its id.
    let usuario_id = match row {
        Some((id,)) => id,
        None => {
            let existing: (Uuid,) = sqlx::query_as("SELECT id FROM usuarios WHERE email = $1")
                .bind(email)
                .fetch_one(pool)
                .await?;
            existing.0
        }
    };

    println!("Ensured usuario {email}");
    Ok(usuario_id)
}

async fn ensure_categoria(
    pool: &sqlx::PgPool,
    descripcion: &str,
    usuario_id: Uuid,
) -> anyhow::Result<Uuid> {
    let row: Option<(Uuid,)> = sqlx::query_as(
        r#"
        INSERT INTO categorias (id, descripcion, usuario_id)
        VALUES ($1, $2, $3)
        ON CONFLICT (descripcion) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(descripcion)
    .bind(usuario_id)
    .fetch_optional(pool)
    .await?;

    let categoria_id = match row {
        Some((id,)) => id,
        None => {
            let existing: (Uuid,) =
                sqlx::query_as("SELECT id FROM categorias WHERE descripcion = $1")
                    .bind(descripcion)
                    .fetch_one(pool)
                    .await?;
            existing.0
        }
    };

    println!("Ensured categoria {descripcion}");
    Ok(categoria_id)
}

async fn seed_productos(
    pool: &sqlx::PgPool,
    usuario_id: Uuid,
    categoria_cafe: Uuid,
    categoria_postres: Uuid,
) -> anyhow::Result<()> {
    let existing: (i64,) = sqlx::query_as("SELECT count(*) FROM productos")
        .fetch_one(pool)
        .await?;
    if existing.0 > 0 {
        println!("Productos already seeded");
        return Ok(());
    }

    let productos = vec![
        ("Café americano", 2.5, Some("Taza grande"), categoria_cafe),
        ("Café con leche", 3.0, None, categoria_cafe),
        ("Cheesecake", 4.5, Some("Porción"), categoria_postres),
        ("Brownie", 3.5, None, categoria_postres),
    ];

    for (nombre, precio, descripcion, categoria_id) in productos {
        sqlx::query(
            r#"
            INSERT INTO productos (id, nombre, precio_uni, descripcion, categoria_id, usuario_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nombre)
        .bind(precio)
        .bind(descripcion)
        .bind(categoria_id)
        .bind(usuario_id)
        .execute(pool)
        .await?;
    }

    println!("Seeded productos");
    Ok(())
}
