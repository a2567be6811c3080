use std::fmt;

/// Failure reported by a [`DrawSurface`](super::DrawSurface).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The per-frame command budget is exhausted.
    BudgetExceeded { limit: usize },
    /// `pop_offset` was called without a matching `push_offset`.
    UnbalancedOffset,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::BudgetExceeded { limit } => {
                write!(f, "draw command budget of {limit} exceeded")
            }
            SurfaceError::UnbalancedOffset => write!(f, "pop_offset called without matching push_offset"),
        }
    }
}

impl std::error::Error for SurfaceError {}
