pub mod errata;
pub mod host;
pub mod report_row;

pub use errata::{ErrataCounts, ErrataListing, ErrataType, Erratum, Severity, SeverityCounts};
pub use host::{ContentFacet, Host, NamedReference, SubscriptionFacet};
pub use report_row::{AdvancedCurrencyRow, HostMetadata, ReportMode, SimpleCurrencyRow};
