use super::api_models;
use crate::currency_scoring::domain::{ErrataListing, Host};
use crate::ports::outbound::SatelliteRepository;
use crate::shared::error::CurrencyError;
use crate::shared::Result;
use reqwest::blocking::Client;
use serde_json::{json, Value};
use std::fmt;

/// Basic-auth credentials for the Satellite API
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// SatelliteClient adapter for the Satellite 6 / Katello REST API
///
/// Implements the SatelliteRepository port with blocking reqwest calls.
///
/// # Behaviour
/// - Every request is a GET carrying the JSON body `{"per_page": "10000"}`
/// - TLS certificates are verified
/// - HTTP status codes are not checked; error bodies fail the shape checks
/// - No retries: a connection failure is reported as `CurrencyError::ApiConnection`
pub struct SatelliteClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl SatelliteClient {
    /// Page size sent with every request. Larger estates are truncated.
    pub const PER_PAGE: &'static str = "10000";

    /// Creates a client for `https://{server}`
    pub fn new(server: &str, credentials: Credentials) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sat6-currency/{}", version);
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            base_url: format!("https://{}", server),
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {server}/api/hosts{search}`
    pub fn hosts_url(&self, search: &str) -> String {
        format!("{}/api/hosts{}", self.base_url, search)
    }

    /// `GET {server}/api/hosts/{id}/errata`
    pub fn host_errata_url(&self, host_id: u64) -> String {
        format!("{}/api/hosts/{}/errata", self.base_url, host_id)
    }

    /// `GET {server}/katello/api/v2/content_views/{id}/content_view_versions?environment_id={env}`
    pub fn content_view_versions_url(&self, content_view_id: u64, environment_id: u64) -> String {
        format!(
            "{}/katello/api/v2/content_views/{}/content_view_versions?environment_id={}",
            self.base_url, content_view_id, environment_id
        )
    }

    /// Performs a GET with a JSON body and parses the JSON response
    pub fn get_with_json(&self, location: &str, body: &Value) -> Result<Value> {
        let response = self
            .client
            .get(location)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .json(body)
            .send()
            .map_err(|e| Self::classify_send_error(location, e))?;

        response
            .json::<Value>()
            .map_err(|e| {
                CurrencyError::MalformedResponse {
                    url: location.to_string(),
                    details: format!("response is not valid JSON: {}", e),
                }
                .into()
            })
    }

    fn paged_get(&self, location: &str) -> Result<Value> {
        self.get_with_json(location, &json!({ "per_page": Self::PER_PAGE }))
    }

    fn classify_send_error(location: &str, error: reqwest::Error) -> anyhow::Error {
        let details = error_chain_text(&error);
        if error.is_builder() {
            CurrencyError::InvalidUrl {
                url: location.to_string(),
                details,
            }
            .into()
        } else {
            CurrencyError::ApiConnection {
                url: location.to_string(),
                details,
            }
            .into()
        }
    }
}

/// reqwest keeps the useful part (refused, DNS, TLS) in the source chain
fn error_chain_text(error: &dyn std::error::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(err) = source {
        text.push_str(": ");
        text.push_str(&err.to_string());
        source = err.source();
    }
    text
}

impl SatelliteRepository for SatelliteClient {
    fn fetch_hosts(&self, search: &str) -> Result<Vec<Host>> {
        let url = self.hosts_url(search);
        let body = self.paged_get(&url)?;
        api_models::parse_hosts(&url, &body)
    }

    fn fetch_host_errata(&self, host_id: u64) -> Result<Option<ErrataListing>> {
        let url = self.host_errata_url(host_id);
        let body = self.paged_get(&url)?;
        api_models::parse_errata_listing(&url, &body)
    }

    fn fetch_content_view_publish_date(
        &self,
        content_view_id: u64,
        environment_id: u64,
    ) -> Result<String> {
        let url = self.content_view_versions_url(content_view_id, environment_id);
        let body = self.paged_get(&url)?;
        api_models::parse_publish_date(&url, &body, content_view_id, environment_id)
    }
}
