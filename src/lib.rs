pub mod config;
pub mod directory;
pub mod routes;
pub mod types;
