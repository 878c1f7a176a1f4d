use std::sync::Arc;

use crate::api::PingHandler;
use crate::error::PingError;
use crate::services::{MemoryProbe, SysinfoProbe};

pub const DEFAULT_PING_ROUTE: &str = "/__ping__";

/// An application that can take a GET route handler.
pub trait RouteRegistrar {
    fn get(&mut self, path: &str, handler: PingHandler);
}

/// Sink for registration diagnostics.
pub trait DiagnosticLogger: Send + Sync {
    fn info(&self, message: &str);
}

/// Forwards to the `log` facade under the `heimdall` target.
///
/// Nothing is written unless the host installs a `log` backend such as
/// `env_logger`, which sends the line to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogLogger;

impl DiagnosticLogger for LogLogger {
    fn info(&self, message: &str) {
        log::info!(target: "heimdall", "{}", message);
    }
}

/// Attaches the ping route to an application.
#[derive(Clone)]
pub struct PingRegistrar {
    probe: Arc<dyn MemoryProbe>,
    logger: Arc<dyn DiagnosticLogger>,
}

impl PingRegistrar {
    pub fn new() -> Self {
        Self {
            probe: Arc::new(SysinfoProbe::new()),
            logger: Arc::new(LogLogger),
        }
    }

    pub fn with_probe(mut self, probe: Arc<dyn MemoryProbe>) -> Self {
        self.probe = probe;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn DiagnosticLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Registers the handler at `route` (default `/__ping__`) and logs one
    /// confirmation line. A missing `app` fails before any side effect.
    pub fn register<A>(&self, app: Option<&mut A>, route: Option<&str>) -> Result<(), PingError>
    where
        A: RouteRegistrar + ?Sized,
    {
        let app = app.ok_or_else(|| {
            PingError::InvalidArgument("Please provide a valid application instance.".to_string())
        })?;

        self.attach(app, route.unwrap_or(DEFAULT_PING_ROUTE));
        Ok(())
    }

    /// Registers the handler on an application that is known to be present.
    pub fn attach<A>(&self, app: &mut A, route: &str)
    where
        A: RouteRegistrar + ?Sized,
    {
        app.get(route, PingHandler::new(self.probe.clone()));

        self.logger
            .info(&format!("[Heimdall] Ping route registered at {}", route));
    }
}

impl Default for PingRegistrar {
    fn default() -> Self {
        Self::new()
    }
}

/// Registers the ping route with the default probe and logger.
///
/// The confirmation line goes through `log`; it only reaches stderr once a
/// backend like `env_logger` has been initialised.
pub fn ping<A>(app: Option<&mut A>, route: Option<&str>) -> Result<(), PingError>
where
    A: RouteRegistrar + ?Sized,
{
    PingRegistrar::new().register(app, route)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemorySample;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingApp {
        routes: Vec<(String, PingHandler)>,
    }

    impl RouteRegistrar for RecordingApp {
        fn get(&mut self, path: &str, handler: PingHandler) {
            self.routes.push((path.to_string(), handler));
        }
    }

    #[derive(Default)]
    struct CapturingLogger {
        lines: Mutex<Vec<String>>,
    }

    impl CapturingLogger {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl DiagnosticLogger for CapturingLogger {
        fn info(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
    }

    struct ZeroProbe;

    impl MemoryProbe for ZeroProbe {
        fn sample(&self) -> MemorySample {
            MemorySample::default()
        }
    }

    fn registrar(logger: &Arc<CapturingLogger>) -> PingRegistrar {
        PingRegistrar::new()
            .with_probe(Arc::new(ZeroProbe))
            .with_logger(logger.clone())
    }

    #[test]
    fn test_default_route() {
        let logger = Arc::new(CapturingLogger::default());
        let mut app = RecordingApp::default();

        registrar(&logger).register(Some(&mut app), None).unwrap();

        assert_eq!(app.routes.len(), 1);
        assert_eq!(app.routes[0].0, "/__ping__");
        assert_eq!(logger.lines(), vec!["[Heimdall] Ping route registered at /__ping__"]);
    }

    #[test]
    fn test_custom_route() {
        let logger = Arc::new(CapturingLogger::default());
        let mut app = RecordingApp::default();

        registrar(&logger).register(Some(&mut app), Some("/health")).unwrap();

        assert_eq!(app.routes.len(), 1);
        assert_eq!(app.routes[0].0, "/health");
        assert_eq!(logger.lines(), vec!["[Heimdall] Ping route registered at /health"]);
    }

    #[test]
    fn test_route_is_not_validated() {
        let logger = Arc::new(CapturingLogger::default());
        let mut app = RecordingApp::default();

        registrar(&logger).register(Some(&mut app), Some("")).unwrap();
        registrar(&logger).register(Some(&mut app), Some("no-leading-slash")).unwrap();

        let paths: Vec<_> = app.routes.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, vec!["", "no-leading-slash"]);
        assert_eq!(logger.lines().len(), 2);
    }

    #[test]
    fn test_attach_registers_and_logs_once() {
        let logger = Arc::new(CapturingLogger::default());
        let mut app = RecordingApp::default();

        registrar(&logger).attach(&mut app, "/live");

        assert_eq!(app.routes.len(), 1);
        assert_eq!(app.routes[0].0, "/live");
        assert_eq!(logger.lines(), vec!["[Heimdall] Ping route registered at /live"]);
    }

    #[test]
    fn test_missing_app_is_rejected_without_side_effects() {
        let logger = Arc::new(CapturingLogger::default());

        let result = registrar(&logger).register::<RecordingApp>(None, Some("/health"));

        assert!(matches!(result, Err(PingError::InvalidArgument(_))));
        assert!(logger.lines().is_empty());
    }

    #[test]
    fn test_registered_handler_responds_ok() {
        let logger = Arc::new(CapturingLogger::default());
        let mut app = RecordingApp::default();

        registrar(&logger).register(Some(&mut app), None).unwrap();

        let response = app.routes[0].1.respond();
        assert_eq!(response.status, "ok");
        assert_eq!(response.message, "Ping successful");
        assert_eq!(response.memory.heap_used, 0.0);
        assert_eq!(response.memory.rss, 0.0);
    }

    #[test]
    fn test_ping_with_defaults() {
        let mut app = RecordingApp::default();
        ping(Some(&mut app), None).unwrap();
        assert_eq!(app.routes[0].0, DEFAULT_PING_ROUTE);

        assert!(ping::<RecordingApp>(None, None).is_err());
    }
}
