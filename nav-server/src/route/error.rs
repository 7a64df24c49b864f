//! Route lookup error types.

/// A lookup into a directions response found nothing to read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The response carries no routes at all
    #[error("no route was returned")]
    NoRoute,

    /// The primary route has fewer legs than requested
    #[error("leg {index} out of range (route has {legs} legs)")]
    LegOutOfRange { index: usize, legs: usize },

    /// The leg has no steps to inspect
    #[error("leg {0} has no steps")]
    NoSteps(usize),
}

/// Waypoints were combined with transit, which the upstream rejects.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, thiserror::Error)]
#[error("{error}")]
pub struct WaypointError {
    pub error: String,
}

impl WaypointError {
    pub(crate) fn transit_with_waypoints() -> Self {
        Self {
            error: "Transit may not be used as a mode when adding waypoints in between an origin and destination.".to_string(),
        }
    }
}
