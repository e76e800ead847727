use crate::application::dto::{CurrencyReportRequest, CurrencyReportSummary};
use crate::currency_scoring::domain::{
    AdvancedCurrencyRow, ContentFacet, Host, HostMetadata, NamedReference, ReportMode,
    SeverityCounts, SimpleCurrencyRow,
};
use crate::currency_scoring::services::CurrencyScorer;
use crate::ports::inbound::CurrencyReportPort;
use crate::ports::outbound::{ProgressReporter, ReportFormatter, ReportWriter, SatelliteRepository};
use crate::shared::error::CurrencyError;
use crate::shared::Result;

/// GenerateCurrencyReportUseCase - Core use case for the currency report
///
/// Orchestrates one report run using generic dependency injection for all
/// infrastructure. Hosts are processed strictly one after another and each
/// row is written as soon as it is complete.
///
/// # Type Parameters
/// * `SR` - SatelliteRepository implementation
/// * `RF` - ReportFormatter implementation
/// * `RW` - ReportWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateCurrencyReportUseCase<SR, RF, RW, PR> {
    satellite_repository: SR,
    report_formatter: RF,
    report_writer: RW,
    progress_reporter: PR,
    scorer: CurrencyScorer,
}

impl<SR, RF, RW, PR> GenerateCurrencyReportUseCase<SR, RF, RW, PR>
where
    SR: SatelliteRepository,
    RF: ReportFormatter,
    RW: ReportWriter,
    PR: ProgressReporter,
{
    /// Creates a new use case with injected dependencies and standard weights
    pub fn new(
        satellite_repository: SR,
        report_formatter: RF,
        report_writer: RW,
        progress_reporter: PR,
    ) -> Self {
        Self {
            satellite_repository,
            report_formatter,
            report_writer,
            progress_reporter,
            scorer: CurrencyScorer::default(),
        }
    }

    /// Replaces the scorer (custom weights)
    pub fn with_scorer(mut self, scorer: CurrencyScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Executes the report selected by the request
    pub fn execute(&self, request: CurrencyReportRequest) -> Result<CurrencyReportSummary> {
        // The header goes out before the first API call
        self.report_writer
            .write_line(&self.report_formatter.header(request.mode))?;

        let hosts = self.fetch_hosts(&request)?;
        let mut summary = CurrencyReportSummary::new(hosts.len());

        for (index, host) in hosts.iter().enumerate() {
            self.progress_reporter
                .report_progress(index + 1, hosts.len(), Some(&host.name));

            let line = match request.mode {
                ReportMode::Simple => self
                    .build_simple_row(host)?
                    .map(|row| self.report_formatter.format_simple_row(&row)),
                ReportMode::Advanced => self
                    .build_advanced_row(host)?
                    .map(|row| self.report_formatter.format_advanced_row(&row)),
            };

            match line {
                Some(line) => {
                    self.report_writer.write_line(&line)?;
                    summary.record_row();
                }
                None => summary.record_skip(),
            }
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Scored {} host(s), skipped {} not registered for content",
            summary.rows_written, summary.hosts_skipped
        ));

        Ok(summary)
    }

    /// Fetches the host list, reporting progress
    fn fetch_hosts(&self, request: &CurrencyReportRequest) -> Result<Vec<Host>> {
        self.progress_reporter.report(&format!(
            "📡 Fetching hosts ({} report)...",
            request.mode
        ));

        let hosts = self.satellite_repository.fetch_hosts(&request.search)?;

        self.progress_reporter
            .report(&format!("✅ Found {} host(s)", hosts.len()));
        if request.mode == ReportMode::Advanced && !hosts.is_empty() {
            self.progress_reporter.report(
                "⏳ Advanced mode queries errata per host; this takes a while on large estates",
            );
        }

        Ok(hosts)
    }

    /// Builds the simple-report row for a host.
    ///
    /// # Returns
    /// `None` for hosts without a content facet or without errata counts
    fn build_simple_row(&self, host: &Host) -> Result<Option<SimpleCurrencyRow>> {
        let Some(facet) = host.content_facet.as_ref() else {
            return Ok(None);
        };
        let Some(counts) = facet.errata_counts else {
            return Ok(None);
        };

        let metadata = self.resolve_metadata(host, facet)?;
        let score = self.scorer.simple_score(&counts);

        Ok(Some(SimpleCurrencyRow::new(metadata, counts, score)))
    }

    /// Builds the advanced-report row for a host.
    ///
    /// # Returns
    /// `None` when the errata response carried no `results`
    fn build_advanced_row(&self, host: &Host) -> Result<Option<AdvancedCurrencyRow>> {
        let Some(listing) = self.satellite_repository.fetch_host_errata(host.id)? else {
            return Ok(None);
        };

        let (counts, metadata) = if listing.has_total {
            let facet = require(host.content_facet.as_ref(), host, "content_facet_attributes")?;
            let metadata = self.resolve_metadata(host, facet)?;
            (SeverityCounts::tally(&listing.errata), metadata)
        } else {
            self.progress_reporter.report_warning(&format!(
                "⚠️  Warning: errata response for host '{}' has no 'total'; reporting zero counts",
                host.name
            ));
            (SeverityCounts::default(), HostMetadata::from_host(host, None))
        };

        let score = self.scorer.advanced_score(&counts);
        Ok(Some(AdvancedCurrencyRow::new(metadata, counts, score)))
    }

    /// Collects the descriptive columns of a registered host, including the
    /// publish date of its content view version.
    fn resolve_metadata(&self, host: &Host, facet: &ContentFacet) -> Result<HostMetadata> {
        let content_view = require_reference(facet.content_view.as_ref(), host, "content_view")?;
        let environment = require_reference(
            facet.lifecycle_environment.as_ref(),
            host,
            "lifecycle_environment",
        )?;
        require(
            host.subscription_facet.as_ref(),
            host,
            "subscription_facet_attributes",
        )?;

        let publish_date = self
            .satellite_repository
            .fetch_content_view_publish_date(content_view.id, environment.id)?;

        Ok(HostMetadata::from_host(host, Some(publish_date)))
    }
}

impl<SR, RF, RW, PR> CurrencyReportPort for GenerateCurrencyReportUseCase<SR, RF, RW, PR>
where
    SR: SatelliteRepository,
    RF: ReportFormatter,
    RW: ReportWriter,
    PR: ProgressReporter,
{
    fn generate_report(&self, request: CurrencyReportRequest) -> Result<CurrencyReportSummary> {
        self.execute(request)
    }
}

fn require<'a, T>(value: Option<&'a T>, host: &Host, field: &str) -> Result<&'a T> {
    value.ok_or_else(|| {
        CurrencyError::MissingField {
            host: host.name.clone(),
            field: field.to_string(),
        }
        .into()
    })
}

fn require_reference<'a>(
    value: Option<&'a NamedReference>,
    host: &Host,
    field: &str,
) -> Result<&'a NamedReference> {
    require(value, host, &format!("content_facet_attributes.{}", field))
}
