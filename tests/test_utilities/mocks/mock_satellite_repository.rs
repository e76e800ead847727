use sat6_currency::adapters::outbound::network::api_models;
use sat6_currency::prelude::*;
use serde_json::Value;
use std::collections::HashMap;

/// Mock SatelliteRepository serving canned API response bodies.
///
/// Bodies go through the same parsing as the real client, so tests
/// exercise the wire-model conversion as well as the use case.
#[derive(Default)]
pub struct MockSatelliteRepository {
    responses: HashMap<String, Value>,
    unreachable: Vec<String>,
}

impl MockSatelliteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body of `/api/hosts{search}`
    pub fn with_hosts(mut self, search: &str, body: Value) -> Self {
        self.responses.insert(format!("/api/hosts{}", search), body);
        self
    }

    /// Body of `/api/hosts/{id}/errata`
    pub fn with_errata(mut self, host_id: u64, body: Value) -> Self {
        self.responses
            .insert(format!("/api/hosts/{}/errata", host_id), body);
        self
    }

    /// Body of the content view versions lookup
    pub fn with_content_view_versions(
        mut self,
        content_view_id: u64,
        environment_id: u64,
        body: Value,
    ) -> Self {
        self.responses
            .insert(Self::cv_path(content_view_id, environment_id), body);
        self
    }

    /// Makes requests to `/api/hosts/{id}/errata` fail as unreachable
    pub fn with_unreachable_errata(mut self, host_id: u64) -> Self {
        self.unreachable
            .push(format!("/api/hosts/{}/errata", host_id));
        self
    }

    fn cv_path(content_view_id: u64, environment_id: u64) -> String {
        format!(
            "/katello/api/v2/content_views/{}/content_view_versions?environment_id={}",
            content_view_id, environment_id
        )
    }

    fn get(&self, path: &str) -> Result<Value> {
        if self.unreachable.iter().any(|p| p == path) {
            return Err(CurrencyError::ApiConnection {
                url: format!("https://localhost{}", path),
                details: "connection refused".to_string(),
            }
            .into());
        }
        // Unknown endpoints answer like the server does for unregistered hosts
        Ok(self
            .responses
            .get(path)
            .cloned()
            .unwrap_or_else(|| serde_json::json!({"error": {"message": "not found"}})))
    }
}

impl SatelliteRepository for MockSatelliteRepository {
    fn fetch_hosts(&self, search: &str) -> Result<Vec<Host>> {
        let path = format!("/api/hosts{}", search);
        api_models::parse_hosts(&path, &self.get(&path)?)
    }

    fn fetch_host_errata(&self, host_id: u64) -> Result<Option<ErrataListing>> {
        let path = format!("/api/hosts/{}/errata", host_id);
        api_models::parse_errata_listing(&path, &self.get(&path)?)
    }

    fn fetch_content_view_publish_date(
        &self,
        content_view_id: u64,
        environment_id: u64,
    ) -> Result<String> {
        let path = Self::cv_path(content_view_id, environment_id);
        api_models::parse_publish_date(&path, &self.get(&path)?, content_view_id, environment_id)
    }
}
