pub mod catalog;
pub mod config;
pub mod models;
pub mod observability;
pub mod services;

pub use config::AppConfig;
pub use observability::init_telemetry;
