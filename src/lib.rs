pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod skill;
pub mod state;
pub mod translate;
