use actix_web::{web, HttpResponse};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

use crate::models::{MemoryUsage, PingResponse};
use crate::registrar::{PingRegistrar, RouteRegistrar};
use crate::services::MemoryProbe;

const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Converts bytes to megabytes rounded to 2 decimal places.
///
/// Ties round half away from zero (`f64::round`); inputs are never negative.
pub fn bytes_to_megabytes(bytes: u64) -> f64 {
    ((bytes as f64 / BYTES_PER_MEGABYTE) * 100.0).round() / 100.0
}

/// Request handler behind the ping route.
#[derive(Clone)]
pub struct PingHandler {
    probe: Arc<dyn MemoryProbe>,
}

impl PingHandler {
    pub fn new(probe: Arc<dyn MemoryProbe>) -> Self {
        Self { probe }
    }

    pub fn respond(&self) -> PingResponse {
        let sample = self.probe.sample();

        PingResponse::new(
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            MemoryUsage {
                heap_used: bytes_to_megabytes(sample.heap_used_bytes),
                rss: bytes_to_megabytes(sample.rss_bytes),
            },
        )
    }
}

impl RouteRegistrar for web::ServiceConfig {
    fn get(&mut self, path: &str, handler: PingHandler) {
        self.route(
            path,
            web::get().to(move || {
                let handler = handler.clone();
                async move { HttpResponse::Ok().json(handler.respond()) }
            }),
        );
    }
}

/// Adapter for `App::configure`.
///
/// Registration runs once per server worker, so the confirmation line is
/// logged by every worker that builds an `App`.
pub fn configure(registrar: PingRegistrar, route: String) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| registrar.attach(cfg, &route)
}
