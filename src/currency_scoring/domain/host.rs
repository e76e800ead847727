use super::errata::ErrataCounts;

/// An `{id, name}` pair as embedded in host records (content view,
/// lifecycle environment)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedReference {
    pub id: u64,
    pub name: Option<String>,
}

impl NamedReference {
    pub fn new(id: u64, name: Option<String>) -> Self {
        Self { id, name }
    }
}

/// Content-management facet of a host.
///
/// Only present for hosts registered with the content subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentFacet {
    /// None when the server sent a null or empty counts map
    pub errata_counts: Option<ErrataCounts>,
    pub content_view: Option<NamedReference>,
    pub lifecycle_environment: Option<NamedReference>,
}

/// Subscription facet of a host
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubscriptionFacet {
    pub release_version: Option<String>,
}

/// Host record as returned by the hosts listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub id: u64,
    pub name: String,
    pub organization_name: Option<String>,
    pub comment: Option<String>,
    pub architecture_name: Option<String>,
    pub operatingsystem_name: Option<String>,
    pub subscription_status: Option<String>,
    pub content_facet: Option<ContentFacet>,
    pub subscription_facet: Option<SubscriptionFacet>,
}

impl Host {
    /// A bare host with only identity set; remaining fields are filled in
    /// by the caller.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            organization_name: None,
            comment: None,
            architecture_name: None,
            operatingsystem_name: None,
            subscription_status: None,
            content_facet: None,
            subscription_facet: None,
        }
    }

    /// The content facet, if it carries a usable errata counts map
    pub fn errata_counts(&self) -> Option<ErrataCounts> {
        self.content_facet.as_ref()?.errata_counts
    }
}
