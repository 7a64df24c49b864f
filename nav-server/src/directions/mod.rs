//! Google Directions API client.
//!
//! Builds the request URL from a [`RouteQuery`], performs a single GET and
//! deserializes the response into [`DirectionsResponse`].
//!
//! Key characteristics of the upstream:
//! - Geocoding and routing failures arrive as HTTP 200 with a `status`
//!   field and per-location `geocoder_status` values
//! - Distances are always metres and durations seconds; only the display
//!   text follows the requested `units`
//! - Transit-only fields (fare, arrival/departure time, transit details)
//!   are simply absent for other modes

mod client;
mod error;
mod mock;
mod options;
mod types;

pub use client::{DirectionsClient, DirectionsConfig, DirectionsProvider};
pub use error::DirectionsError;
pub use mock::{MockDirectionsClient, mock_key};
pub use options::{
    DIRECTIONS_URL, OptionValue, RouteOptions, RouteQuery, build_url, encode_query,
};
pub use types::{
    DirectionsResponse, Fare, GeocodedWaypoint, LatLng, Leg, Route, Step, TextValue, TimeValue,
    TransitDetails, TransitLine, Vehicle,
};
