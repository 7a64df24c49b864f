//! Lookups over the directions response shape (routes, legs, steps).

mod accessors;
mod error;

#[cfg(test)]
pub(crate) mod fixtures;

pub use accessors::{TransitPreferences, TravelModeDuration};
pub use error::{RouteError, WaypointError};
