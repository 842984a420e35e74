pub mod jwt_auth_layer;
pub mod jwt_auth_service;
