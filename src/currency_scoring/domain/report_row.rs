use super::errata::{ErrataCounts, SeverityCounts};
use super::host::{ContentFacet, Host};

/// Which report to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// Aggregate counts read from the host records
    #[default]
    Simple,
    /// Per-host errata listing with security errata split by severity
    Advanced,
}

impl std::fmt::Display for ReportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportMode::Simple => write!(f, "simple"),
            ReportMode::Advanced => write!(f, "advanced"),
        }
    }
}

/// Descriptive columns shared by both report variants
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HostMetadata {
    pub system_id: u64,
    pub org_name: Option<String>,
    pub name: String,
    pub content_view: Option<String>,
    pub content_view_publish_date: Option<String>,
    pub lifecycle_environment: Option<String>,
    pub subscription_os_release: Option<String>,
    pub os_release: Option<String>,
    pub arch: Option<String>,
    pub subscription_status: Option<String>,
    pub comment: Option<String>,
}

impl HostMetadata {
    /// Copies whatever the host record carries. The publish date is not
    /// part of the host record and has to be looked up separately.
    pub fn from_host(host: &Host, publish_date: Option<String>) -> Self {
        let facet = host.content_facet.as_ref();
        Self {
            system_id: host.id,
            org_name: host.organization_name.clone(),
            name: host.name.clone(),
            content_view: facet.and_then(content_view_name),
            content_view_publish_date: publish_date,
            lifecycle_environment: facet.and_then(lifecycle_environment_name),
            subscription_os_release: host
                .subscription_facet
                .as_ref()
                .and_then(|s| s.release_version.clone()),
            os_release: host.operatingsystem_name.clone(),
            arch: host.architecture_name.clone(),
            subscription_status: host.subscription_status.clone(),
            comment: host.comment.clone(),
        }
    }
}

fn content_view_name(facet: &ContentFacet) -> Option<String> {
    facet.content_view.as_ref()?.name.clone()
}

fn lifecycle_environment_name(facet: &ContentFacet) -> Option<String> {
    facet.lifecycle_environment.as_ref()?.name.clone()
}

/// One line of the simple report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleCurrencyRow {
    pub metadata: HostMetadata,
    pub counts: ErrataCounts,
    pub score: u64,
}

impl SimpleCurrencyRow {
    pub fn new(metadata: HostMetadata, counts: ErrataCounts, score: u64) -> Self {
        Self {
            metadata,
            counts,
            score,
        }
    }
}

/// One line of the advanced report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvancedCurrencyRow {
    pub metadata: HostMetadata,
    pub counts: SeverityCounts,
    pub score: u64,
}

impl AdvancedCurrencyRow {
    pub fn new(metadata: HostMetadata, counts: SeverityCounts, score: u64) -> Self {
        Self {
            metadata,
            counts,
            score,
        }
    }
}
