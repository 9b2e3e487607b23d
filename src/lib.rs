pub mod config;
pub mod error;
pub mod extract;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
