use std::sync::Arc;
use std::time::Instant;

use polyglot_core::bridge::ProcessBridge;
use polyglot_core::results::ResultStore;
use polyglot_core::xdg::BaseDirs;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is `Copy`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Launches the external processor.
    pub bridge: Arc<ProcessBridge>,
    /// Location of the processor's result file.
    pub results: Arc<ResultStore>,
    /// XDG variables captured at startup.
    pub base_dirs: Arc<BaseDirs>,
    /// When the server started, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig, results: ResultStore, base_dirs: BaseDirs) -> Self {
        let bridge = ProcessBridge::new(config.processor.clone());
        Self {
            config: Arc::new(config),
            bridge: Arc::new(bridge),
            results: Arc::new(results),
            base_dirs: Arc::new(base_dirs),
            started_at: Instant::now(),
        }
    }

    pub fn uptime_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
