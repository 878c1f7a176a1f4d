//! Health-check ("ping") route for actix-web applications.
//!
//! Registration logs `[Heimdall] Ping route registered at <route>` through the
//! `log` facade. Initialise `env_logger` (or another backend) to see it on
//! stderr, or pass a custom `DiagnosticLogger` to `PingRegistrar::with_logger`.
//!
//! ```no_run
//! use actix_web::{App, HttpServer};
//! use heimdall::{configure, PingRegistrar};
//!
//! # async fn run() -> std::io::Result<()> {
//! let registrar = PingRegistrar::new();
//! HttpServer::new(move || {
//!     App::new().configure(configure(registrar.clone(), "/__ping__".to_string()))
//! })
//! .bind("127.0.0.1:8080")?
//! .run()
//! .await
//! # }
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod registrar;
pub mod services;

pub use api::{configure, PingHandler};
pub use error::PingError;
pub use models::{MemoryUsage, PingResponse};
pub use registrar::{
    ping, DiagnosticLogger, LogLogger, PingRegistrar, RouteRegistrar, DEFAULT_PING_ROUTE,
};
pub use services::{MemoryProbe, MemorySample, SysinfoProbe, TrackingAllocator};
