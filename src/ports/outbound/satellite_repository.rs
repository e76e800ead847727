use crate::currency_scoring::domain::{ErrataListing, Host};
use crate::shared::Result;

/// SatelliteRepository port for the systems-management server
///
/// Abstracts the REST API the report reads from. Every call is a
/// blocking round trip; implementations must not retry.
pub trait SatelliteRepository {
    /// Fetches all hosts matching `search`
    ///
    /// # Arguments
    /// * `search` - Raw query suffix appended to the hosts endpoint,
    ///   e.g. `?search=lifecycle_environment=Test`. May be empty.
    ///
    /// # Errors
    /// Returns an error if the API cannot be reached or the response has
    /// no host list
    fn fetch_hosts(&self, search: &str) -> Result<Vec<Host>>;

    /// Fetches the errata applicable to one host
    ///
    /// # Returns
    /// `None` if the response carried no `results` field, which is how the
    /// server answers for hosts not registered for content.
    fn fetch_host_errata(&self, host_id: u64) -> Result<Option<ErrataListing>>;

    /// Fetches the creation date of the content view version promoted to
    /// the given lifecycle environment. Only the first version returned
    /// is considered.
    ///
    /// # Errors
    /// Returns `CurrencyError::NoContentViewVersion` if the server lists no
    /// version
    fn fetch_content_view_publish_date(
        &self,
        content_view_id: u64,
        environment_id: u64,
    ) -> Result<String>;
}
