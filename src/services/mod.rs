pub mod auth_service;
pub mod producto_service;
