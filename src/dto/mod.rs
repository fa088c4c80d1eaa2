pub mod auth;
pub mod productos;
