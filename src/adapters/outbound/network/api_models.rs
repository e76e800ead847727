//! Wire models of the Satellite / Katello REST API and their conversion
//! into domain types.
//!
//! Free-form scalar fields (organization, comment, status ...) are kept as
//! raw JSON values and stringified, since the server sends some of them as
//! numbers and any of them may be null.

use crate::currency_scoring::domain::{
    ContentFacet, ErrataCounts, ErrataListing, ErrataType, Erratum, Host, NamedReference,
    Severity, SubscriptionFacet,
};
use crate::shared::error::CurrencyError;
use crate::shared::Result;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
struct HostDto {
    id: u64,
    name: String,
    #[serde(default)]
    organization_name: Option<Value>,
    #[serde(default)]
    comment: Option<Value>,
    #[serde(default)]
    architecture_name: Option<Value>,
    #[serde(default)]
    operatingsystem_name: Option<Value>,
    #[serde(default)]
    subscription_status: Option<Value>,
    #[serde(default)]
    content_facet_attributes: Option<ContentFacetDto>,
    #[serde(default)]
    subscription_facet_attributes: Option<SubscriptionFacetDto>,
}

#[derive(Debug, Deserialize)]
struct ContentFacetDto {
    #[serde(default)]
    errata_counts: Option<Map<String, Value>>,
    #[serde(default)]
    content_view: Option<NamedReferenceDto>,
    #[serde(default)]
    lifecycle_environment: Option<NamedReferenceDto>,
}

#[derive(Debug, Deserialize)]
struct NamedReferenceDto {
    id: u64,
    #[serde(default)]
    name: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct SubscriptionFacetDto {
    #[serde(default)]
    release_version: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ErratumDto {
    #[serde(rename = "type")]
    errata_type: String,
    #[serde(default)]
    severity: Option<String>,
}

/// Renders a scalar JSON value as report text; null becomes None
pub fn scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl From<NamedReferenceDto> for NamedReference {
    fn from(dto: NamedReferenceDto) -> Self {
        NamedReference::new(dto.id, scalar_text(dto.name.as_ref()))
    }
}

impl From<ContentFacetDto> for ContentFacet {
    fn from(dto: ContentFacetDto) -> Self {
        ContentFacet {
            errata_counts: dto.errata_counts.as_ref().and_then(errata_counts),
            content_view: dto.content_view.map(NamedReference::from),
            lifecycle_environment: dto.lifecycle_environment.map(NamedReference::from),
        }
    }
}

impl From<HostDto> for Host {
    fn from(dto: HostDto) -> Self {
        let mut host = Host::new(dto.id, dto.name);
        host.organization_name = scalar_text(dto.organization_name.as_ref());
        host.comment = scalar_text(dto.comment.as_ref());
        host.architecture_name = scalar_text(dto.architecture_name.as_ref());
        host.operatingsystem_name = scalar_text(dto.operatingsystem_name.as_ref());
        host.subscription_status = scalar_text(dto.subscription_status.as_ref());
        host.content_facet = dto.content_facet_attributes.map(ContentFacet::from);
        host.subscription_facet = dto.subscription_facet_attributes.map(|s| SubscriptionFacet {
            release_version: scalar_text(s.release_version.as_ref()),
        });
        host
    }
}

/// An empty counts map means the server has not counted errata for the
/// host yet; it is treated like a missing map.
fn errata_counts(map: &Map<String, Value>) -> Option<ErrataCounts> {
    if map.is_empty() {
        return None;
    }
    let count = |key: &str| map.get(key).and_then(Value::as_u64);
    Some(ErrataCounts::new(
        count("security"),
        count("bugfix"),
        count("enhancement"),
    ))
}

/// Pulls `results` out of a listing response.
///
/// Returns None when the field is absent. A null `results` counts as an
/// empty list.
fn results_of(body: &Value) -> Option<Value> {
    match body.get("results")? {
        Value::Null => Some(Value::Array(Vec::new())),
        results => Some(results.clone()),
    }
}

/// Best-effort description of an API error body
fn describe_missing_results(body: &Value) -> String {
    let server_message = body
        .pointer("/error/message")
        .or_else(|| body.get("displayMessage"))
        .and_then(Value::as_str);
    match server_message {
        Some(message) => format!("response has no 'results' (server said: {})", message),
        None => "response has no 'results'".to_string(),
    }
}

fn malformed(url: &str, details: impl Into<String>) -> anyhow::Error {
    CurrencyError::MalformedResponse {
        url: url.to_string(),
        details: details.into(),
    }
    .into()
}

/// Converts a hosts listing response into domain hosts
pub fn parse_hosts(url: &str, body: &Value) -> Result<Vec<Host>> {
    let results = results_of(body).ok_or_else(|| malformed(url, describe_missing_results(body)))?;
    let hosts: Vec<HostDto> = serde_json::from_value(results)
        .map_err(|e| malformed(url, format!("invalid host record: {}", e)))?;
    Ok(hosts.into_iter().map(Host::from).collect())
}

/// Converts a per-host errata response.
///
/// `None` when the response has no `results` field.
pub fn parse_errata_listing(url: &str, body: &Value) -> Result<Option<ErrataListing>> {
    let Some(results) = results_of(body) else {
        return Ok(None);
    };
    let has_total = body.get("total").is_some();
    let errata: Vec<ErratumDto> = serde_json::from_value(results)
        .map_err(|e| malformed(url, format!("invalid erratum record: {}", e)))?;

    let errata = errata
        .into_iter()
        .map(|dto| {
            Erratum::new(
                ErrataType::parse(&dto.errata_type),
                Severity::parse(dto.severity.as_deref()),
            )
        })
        .collect();

    Ok(Some(ErrataListing::new(has_total, errata)))
}

/// Extracts `created_at` of the first content view version
pub fn parse_publish_date(
    url: &str,
    body: &Value,
    content_view_id: u64,
    environment_id: u64,
) -> Result<String> {
    let results = results_of(body).ok_or_else(|| malformed(url, describe_missing_results(body)))?;
    let first = results
        .as_array()
        .ok_or_else(|| malformed(url, "'results' is not a list"))?
        .first()
        .ok_or(CurrencyError::NoContentViewVersion {
            content_view_id,
            environment_id,
        })?;

    scalar_text(first.get("created_at"))
        .ok_or_else(|| malformed(url, "content view version has no 'created_at'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const URL: &str = "https://satellite.example.com/api/hosts";

    fn registered_host() -> Value {
        json!({
            "id": 12,
            "name": "web01.example.com",
            "organization_name": "ACME",
            "comment": null,
            "architecture_name": "x86_64",
            "operatingsystem_name": "RedHat 8.6",
            "subscription_status": 0,
            "content_facet_attributes": {
                "errata_counts": {"security": 2, "bugfix": 3, "enhancement": 1, "total": 6},
                "content_view": {"id": 4, "name": "RHEL8-Base"},
                "lifecycle_environment": {"id": 2, "name": "Production"}
            },
            "subscription_facet_attributes": {"release_version": "8"}
        })
    }

    #[test]
    fn test_parse_registered_host() {
        let body = json!({"total": 1, "results": [registered_host()]});
        let hosts = parse_hosts(URL, &body).unwrap();
        assert_eq!(hosts.len(), 1);

        let host = &hosts[0];
        assert_eq!(host.id, 12);
        assert_eq!(host.organization_name.as_deref(), Some("ACME"));
        assert!(host.comment.is_none());
        assert_eq!(host.subscription_status.as_deref(), Some("0"));
        assert_eq!(
            host.errata_counts(),
            Some(ErrataCounts::new(Some(2), Some(3), Some(1)))
        );

        let facet = host.content_facet.as_ref().unwrap();
        assert_eq!(
            facet.content_view,
            Some(NamedReference::new(4, Some("RHEL8-Base".to_string())))
        );
        assert_eq!(facet.lifecycle_environment.as_ref().unwrap().id, 2);
        assert_eq!(
            host.subscription_facet.as_ref().unwrap().release_version.as_deref(),
            Some("8")
        );
    }

    #[test]
    fn test_parse_unregistered_host() {
        let body = json!({"results": [{"id": 3, "name": "bare.example.com"}]});
        let hosts = parse_hosts(URL, &body).unwrap();
        assert!(hosts[0].content_facet.is_none());
        assert!(hosts[0].subscription_facet.is_none());
    }

    #[test]
    fn test_parse_null_and_empty_errata_counts() {
        let body = json!({"results": [
            {"id": 1, "name": "a", "content_facet_attributes": {"errata_counts": null}},
            {"id": 2, "name": "b", "content_facet_attributes": {"errata_counts": {}}},
            {"id": 3, "name": "c", "content_facet_attributes": {"errata_counts": {"security": null, "bugfix": 1, "enhancement": 0}}}
        ]});
        let hosts = parse_hosts(URL, &body).unwrap();
        assert!(hosts[0].errata_counts().is_none());
        assert!(hosts[1].errata_counts().is_none());
        assert_eq!(
            hosts[2].errata_counts(),
            Some(ErrataCounts::new(None, Some(1), Some(0)))
        );
    }

    #[test]
    fn test_parse_hosts_missing_results() {
        let body = json!({"error": {"message": "Unable to authenticate user admin"}});
        let err = parse_hosts(URL, &body).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("no 'results'"));
        assert!(message.contains("Unable to authenticate user admin"));
        assert!(matches!(
            err.downcast_ref::<CurrencyError>(),
            Some(CurrencyError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_parse_hosts_invalid_record() {
        let body = json!({"results": [{"name": "no-id"}]});
        let err = parse_hosts(URL, &body).unwrap_err();
        assert!(err.to_string().contains("invalid host record"));
    }

    #[test]
    fn test_parse_errata_listing() {
        let body = json!({
            "total": 3,
            "subtotal": 3,
            "results": [
                {"type": "security", "severity": "Critical", "errata_id": "RHSA-2024:0001"},
                {"type": "bugfix", "severity": ""},
                {"type": "enhancement"}
            ]
        });
        let listing = parse_errata_listing(URL, &body).unwrap().unwrap();
        assert!(listing.has_total);
        assert_eq!(listing.errata.len(), 3);
        assert_eq!(listing.errata[0].severity(), Severity::Critical);
        assert_eq!(listing.errata[1].errata_type(), &ErrataType::Bugfix);
        assert_eq!(listing.errata[2].severity(), Severity::Unspecified);
    }

    #[test]
    fn test_parse_errata_listing_without_results() {
        let body = json!({"displayMessage": "Host has not been registered with subscription-manager"});
        assert!(parse_errata_listing(URL, &body).unwrap().is_none());
    }

    #[test]
    fn test_parse_errata_listing_total_presence() {
        let with_null_total = json!({"total": null, "results": []});
        assert!(parse_errata_listing(URL, &with_null_total).unwrap().unwrap().has_total);

        let without_total = json!({"results": [{"type": "bugfix"}]});
        let listing = parse_errata_listing(URL, &without_total).unwrap().unwrap();
        assert!(!listing.has_total);
        assert_eq!(listing.errata.len(), 1);
    }

    #[test]
    fn test_parse_publish_date_first_result() {
        let body = json!({"results": [
            {"id": 9, "created_at": "2024-03-01 10:00:00 UTC"},
            {"id": 8, "created_at": "2023-12-01 10:00:00 UTC"}
        ]});
        assert_eq!(
            parse_publish_date(URL, &body, 4, 2).unwrap(),
            "2024-03-01 10:00:00 UTC"
        );
    }

    #[test]
    fn test_parse_publish_date_no_versions() {
        let body = json!({"results": []});
        let err = parse_publish_date(URL, &body, 4, 2).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CurrencyError>(),
            Some(CurrencyError::NoContentViewVersion {
                content_view_id: 4,
                environment_id: 2
            })
        ));
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(Some(&json!("x"))), Some("x".to_string()));
        assert_eq!(scalar_text(Some(&json!(5))), Some("5".to_string()));
        assert_eq!(scalar_text(Some(&json!(true))), Some("true".to_string()));
        assert_eq!(scalar_text(Some(&Value::Null)), None);
        assert_eq!(scalar_text(None), None);
    }
}
