use crate::logging::LoggingConfig;
use crate::time::ClockConfig;

/// What the frame loop does when a node fails to draw.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum VisitFailurePolicy {
    /// Discard the partial frame, log a warning and keep running.
    #[default]
    AbandonFrame,
    /// Discard the partial frame and stop the loop.
    Exit,
}

/// Engine configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Passed to `logging::init_logging` by binaries; the director itself never installs a logger.
    pub logging: LoggingConfig,
    pub clock: ClockConfig,
    pub on_visit_failure: VisitFailurePolicy,
}
