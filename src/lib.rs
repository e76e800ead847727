//! sat6-currency - host currency report for Satellite 6
//!
//! Queries the Satellite / Katello REST API and scores every managed host
//! by how far behind it is on security, bugfix and enhancement errata, the
//! way `spacewalk-report system-currency` did for Satellite 5. The report
//! is written to stdout as CSV.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`currency_scoring`): hosts, errata and score rules
//! - **Application Layer** (`application`): the report use case and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Satellite client, CSV formatter, console I/O
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use sat6_currency::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let client = SatelliteClient::new("satellite.example.com", Credentials::new("admin", "changeme"))?;
//!
//! let use_case = GenerateCurrencyReportUseCase::new(
//!     client,
//!     CsvFormatter::new(),
//!     StdoutReportWriter::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = CurrencyReportRequest::new(ReportMode::Simple, "");
//! let summary = use_case.execute(request)?;
//! eprintln!("{} row(s)", summary.rows_written);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod currency_scoring;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        SilentProgressReporter, StderrProgressReporter, StdoutReportWriter,
    };
    pub use crate::adapters::outbound::formatters::CsvFormatter;
    pub use crate::adapters::outbound::network::{Credentials, SatelliteClient};
    pub use crate::application::dto::{CurrencyReportRequest, CurrencyReportSummary};
    pub use crate::application::use_cases::GenerateCurrencyReportUseCase;
    pub use crate::currency_scoring::domain::{
        AdvancedCurrencyRow, ContentFacet, ErrataCounts, ErrataListing, ErrataType, Erratum,
        Host, HostMetadata, NamedReference, ReportMode, Severity, SeverityCounts,
        SimpleCurrencyRow, SubscriptionFacet,
    };
    pub use crate::currency_scoring::policies::{SeverityWeights, SimpleWeights};
    pub use crate::currency_scoring::services::CurrencyScorer;
    pub use crate::ports::inbound::CurrencyReportPort;
    pub use crate::ports::outbound::{
        ProgressReporter, ReportFormatter, ReportWriter, SatelliteRepository,
    };
    pub use crate::shared::error::{CurrencyError, ExitCode};
    pub use crate::shared::Result;
}
