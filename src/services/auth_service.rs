use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use password_hash::rand_core::OsRng;
use uuid::Uuid;

use crate::{
    audit::{AuditAction, log_audit},
    dto::auth::{Claims, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
    error::{AppError, AppResult},
    models::Usuario,
    state::AppState,
};

#[derive(Debug, sqlx::FromRow)]
struct UsuarioRow {
    id: Uuid,
    nombre: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<UsuarioRow> for Usuario {
    fn from(row: UsuarioRow) -> Self {
        Usuario {
            id: row.id,
            nombre: row.nombre,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<RegisterResponse> {
    let RegisterRequest {
        nombre,
        email,
        password,
    } = payload;

    let exist: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM usuarios WHERE email = $1")
        .bind(email.as_str())
        .fetch_optional(&state.pool)
        .await?;

    if exist.is_some() {
        return Err(AppError::BadRequest("Email is already taken".to_string()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string();

    let id = Uuid::new_v4();

    let usuario: UsuarioRow = sqlx::query_as(
        "INSERT INTO usuarios (id, nombre, email, password_hash) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(id)
    .bind(nombre.as_str())
    .bind(email.as_str())
    .bind(password_hash)
    .fetch_one(&state.pool)
    .await?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(usuario.id),
        AuditAction::UsuarioRegistrar,
        Some(serde_json::json!({ "usuario_id": usuario.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(RegisterResponse {
        ok: true,
        usuario: usuario.into(),
    })
}

pub async fn login_user(state: &AppState, payload: LoginRequest) -> AppResult<LoginResponse> {
    let LoginRequest { email, password } = payload;

    let usuario: Option<UsuarioRow> =
        sqlx::query_as("SELECT * FROM usuarios WHERE email = $1")
            .bind(email.as_str())
            .fetch_optional(&state.pool)
            .await?;

    let usuario = match usuario {
        Some(u) => u,
        None => return Err(AppError::BadRequest("Invalid email or password".into())),
    };

    let parsed_hash = PasswordHash::new(&usuario.password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;

    let argon2 = Argon2::default();
    if argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(AppError::BadRequest("Invalid email or password".into()));
    }

    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(state.config.token_ttl_hours))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: usuario.id.to_string(),
        exp: expiration.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;

    if let Err(err) = log_audit(
        &state.pool,
        Some(usuario.id),
        AuditAction::UsuarioLogin,
        Some(serde_json::json!({ "usuario_id": usuario.id })),
    )
    .await
    {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(LoginResponse {
        ok: true,
        usuario: usuario.into(),
        token,
    })
}
