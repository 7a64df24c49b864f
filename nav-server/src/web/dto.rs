//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::directions::{RouteOptions, RouteQuery};

/// Request to summarise a trip.
///
/// Any field other than `origin` and `destination` is forwarded to the
/// directions API as a routing option, e.g. `"mode": "walking"` or
/// `"avoid": ["ferries", "tolls"]`.
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    /// Free-text start location
    pub origin: String,

    /// Free-text end location
    pub destination: String,

    #[serde(flatten)]
    pub options: RouteOptions,
}

impl SummaryRequest {
    pub fn into_query(self) -> RouteQuery {
        RouteQuery::new(self.origin, self.destination).with_options(self.options)
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
