//! HTTP plumbing shared by the `tagging` and `metadata_lookup` servers.
//!
//! Everything here is independent of what a server stores: CORS, tracing
//! setup, listener binding, graceful shutdown and the health endpoints.

pub mod cors;
pub mod health;
pub mod listener;
pub mod shutdown;
pub mod telemetry;

pub use cors::{cors_layer, parse_origins};
pub use listener::{bind_listener, resolve_port, ServeArgs, DEFAULT_PORT};
pub use shutdown::shutdown_signal;
pub use telemetry::init_tracing;
