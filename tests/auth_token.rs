use axum::extract::FromRequestParts;
use axum::http::{Request, header};
use cafe_productos_api::{
    config::AppConfig, dto::auth::Claims, error::AppError, middleware::auth::AuthUser,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

const SECRET: &str = "test-seed";

fn test_config() -> AppConfig {
    AppConfig {
        database_url: "postgres://unused".into(),
        host: "127.0.0.1".into(),
        port: 0,
        jwt_secret: SECRET.into(),
        token_ttl_hours: 48,
    }
}

fn make_token(sub: &str, secret: &str, ttl: Duration) -> String {
    let exp = (Utc::now() + ttl).timestamp() as usize;
    let claims = Claims {
        sub: sub.into(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

async fn extract(auth_header: Option<&str>) -> Result<AuthUser, AppError> {
    let mut builder = Request::builder().uri("/productos");
    if let Some(value) = auth_header {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let (mut parts, _) = builder.body(()).unwrap().into_parts();
    AuthUser::from_request_parts(&mut parts, &test_config()).await
}

#[tokio::test]
async fn valid_token_resolves_caller_identity() {
    let usuario_id = Uuid::new_v4();
    let token = make_token(&usuario_id.to_string(), SECRET, Duration::hours(1));

    let user = extract(Some(&format!("Bearer {token}"))).await.unwrap();
    assert_eq!(user.usuario_id, usuario_id);
}

#[tokio::test]
async fn missing_header_is_rejected() {
    let err = extract(None).await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
}

#[tokio::test]
async fn non_bearer_scheme_is_rejected() {
    let err = extract(Some("Basic abc123")).await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let err = extract(Some("Bearer not-a-jwt")).await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
}

#[tokio::test]
async fn token_signed_with_other_secret_is_rejected() {
    let token = make_token(
        &Uuid::new_v4().to_string(),
        "otro-seed",
        Duration::hours(1),
    );
    let err = extract(Some(&format!("Bearer {token}"))).await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
}

#[tokio::test]
async fn expired_token_is_rejected() {
    let token = make_token(&Uuid::new_v4().to_string(), SECRET, Duration::hours(-2));
    let err = extract(Some(&format!("Bearer {token}"))).await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
}

#[tokio::test]
async fn non_uuid_subject_is_rejected() {
    let token = make_token("no-soy-un-uuid", SECRET, Duration::hours(1));
    let err = extract(Some(&format!("Bearer {token}"))).await.unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
}
