// Observability module - structured logging setup

pub mod tracing;

pub use self::tracing::{init_telemetry, TelemetryError};
