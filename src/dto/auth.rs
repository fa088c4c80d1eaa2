use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Usuario;

#[derive(Deserialize, Debug, ToSchema)]
pub struct RegisterRequest {
    pub nombre: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub ok: bool,
    pub usuario: Usuario,
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub ok: bool,
    pub usuario: Usuario,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}
