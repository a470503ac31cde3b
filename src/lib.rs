pub mod auth;
pub mod db;
pub mod domain;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Orders delivered inside the platform's base city carry no delivery fee.
pub const BASE_CITY: &str = "Tashkent";
