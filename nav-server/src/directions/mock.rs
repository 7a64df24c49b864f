//! Mock directions client for testing without API access.
//!
//! Loads canned responses from JSON files and serves them as if they were
//! live API responses. A file named `london_to_paris.json` answers the
//! query origin "London", destination "Paris"; routing options are ignored.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use futures::future::{self, BoxFuture};
use futures::FutureExt;

use super::client::DirectionsProvider;
use super::error::DirectionsError;
use super::options::RouteQuery;
use super::types::DirectionsResponse;

/// Mock client that serves responses from JSON files.
#[derive(Debug, Clone)]
pub struct MockDirectionsClient {
    routes: Arc<HashMap<String, DirectionsResponse>>,
}

impl MockDirectionsClient {
    /// Load every `*.json` file in `data_dir`, keyed by file stem.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, DirectionsError> {
        let data_dir = data_dir.as_ref();
        let mut routes = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            DirectionsError::NotConfigured(format!(
                "failed to read mock data directory {}: {e}",
                data_dir.display()
            ))
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| {
                DirectionsError::NotConfigured(format!("failed to read directory entry: {e}"))
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let json = std::fs::read_to_string(&path).map_err(|e| {
                DirectionsError::NotConfigured(format!("failed to read {}: {e}", path.display()))
            })?;

            let response: DirectionsResponse =
                serde_json::from_str(&json).map_err(|e| DirectionsError::Json {
                    message: format!("{}: {e}", path.display()),
                    body: None,
                })?;

            routes.insert(stem.to_string(), response);
        }

        if routes.is_empty() {
            return Err(DirectionsError::NotConfigured(format!(
                "no mock route files found in {}",
                data_dir.display()
            )));
        }

        Ok(Self {
            routes: Arc::new(routes),
        })
    }

    /// Serve the canned response for a query.
    pub fn fetch(&self, query: &RouteQuery) -> Result<DirectionsResponse, DirectionsError> {
        let key = mock_key(query);
        self.routes
            .get(&key)
            .cloned()
            .ok_or(DirectionsError::NoMockRoute(key))
    }

    /// Keys of the loaded responses, sorted.
    pub fn available_routes(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

impl DirectionsProvider for MockDirectionsClient {
    fn directions<'a>(
        &'a self,
        query: &'a RouteQuery,
    ) -> BoxFuture<'a, Result<DirectionsResponse, DirectionsError>> {
        future::ready(self.fetch(query)).boxed()
    }
}

/// File stem for a query: "San Diego" to "Los Angeles" is `san_diego_to_los_angeles`.
pub fn mock_key(query: &RouteQuery) -> String {
    format!("{}_to_{}", slug(&query.origin), slug(&query.destination))
}

fn slug(place: &str) -> String {
    place
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_from_query() {
        let query = RouteQuery::new("San Diego", "Los Angeles");
        assert_eq!(mock_key(&query), "san_diego_to_los_angeles");

        let query = RouteQuery::new("Seattle, Washington", "  Bainbridge Island ");
        assert_eq!(mock_key(&query), "seattle_washington_to_bainbridge_island");
    }

    #[test]
    fn load_mock_data() {
        let client = MockDirectionsClient::new("data/mock_routes").unwrap();
        let routes = client.available_routes();

        assert!(routes.contains(&"london_to_paris"));
        assert!(routes.contains(&"london_to_atlantis"));
    }

    #[tokio::test]
    async fn serves_canned_response() {
        let client = MockDirectionsClient::new("data/mock_routes").unwrap();
        let query = RouteQuery::new("London", "Paris").with_option("units", "metric");

        let response = client.directions(&query).await.unwrap();

        assert_eq!(response.status, "OK");
        assert_eq!(response.routes.len(), 1);
    }

    #[tokio::test]
    async fn unknown_query_returns_error() {
        let client = MockDirectionsClient::new("data/mock_routes").unwrap();
        let query = RouteQuery::new("Nowhere", "Elsewhere");

        let result = client.directions(&query).await;

        assert!(matches!(result, Err(DirectionsError::NoMockRoute(key)) if key == "nowhere_to_elsewhere"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(MockDirectionsClient::new("data/does_not_exist").is_err());
    }
}
