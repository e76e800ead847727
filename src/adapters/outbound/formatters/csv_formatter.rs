use crate::currency_scoring::domain::{
    AdvancedCurrencyRow, HostMetadata, ReportMode, SimpleCurrencyRow,
};
use crate::ports::outbound::ReportFormatter;

/// Columns of the simple report
pub const SIMPLE_COLUMNS: [&str; 15] = [
    "system_id",
    "org_name",
    "name",
    "security",
    "bug",
    "enhancement",
    "score",
    "content_view",
    "content_view_publish_date",
    "lifecycle_environment",
    "subscription_os_release",
    "os_release",
    "arch",
    "subscription_status",
    "comment",
];

/// Columns of the advanced report
pub const ADVANCED_COLUMNS: [&str; 18] = [
    "system_id",
    "org_name",
    "name",
    "critical",
    "important",
    "moderate",
    "low",
    "bug",
    "enhancement",
    "score",
    "content_view",
    "content_view_publish_date",
    "lifecycle_environment",
    "subscription_os_release",
    "os_release",
    "arch",
    "subscription_status",
    "comment",
];

/// CsvFormatter adapter rendering report lines as comma-separated values
///
/// Fields are quoted only when they contain a comma, a double quote or a
/// line break (RFC 4180). Missing values render as empty fields.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    fn escape_field(value: &str) -> String {
        if value.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }

    fn optional(value: &Option<String>) -> String {
        value.as_deref().map(Self::escape_field).unwrap_or_default()
    }

    fn optional_count(value: Option<u64>) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    /// system_id, org_name, name
    fn leading_fields(metadata: &HostMetadata) -> Vec<String> {
        vec![
            metadata.system_id.to_string(),
            Self::optional(&metadata.org_name),
            Self::escape_field(&metadata.name),
        ]
    }

    /// content_view .. comment
    fn trailing_fields(metadata: &HostMetadata) -> Vec<String> {
        vec![
            Self::optional(&metadata.content_view),
            Self::optional(&metadata.content_view_publish_date),
            Self::optional(&metadata.lifecycle_environment),
            Self::optional(&metadata.subscription_os_release),
            Self::optional(&metadata.os_release),
            Self::optional(&metadata.arch),
            Self::optional(&metadata.subscription_status),
            Self::optional(&metadata.comment),
        ]
    }

    /// Field values of a simple row, in column order
    pub fn simple_fields(row: &SimpleCurrencyRow) -> Vec<String> {
        let mut fields = Self::leading_fields(&row.metadata);
        fields.extend([
            Self::optional_count(row.counts.security),
            Self::optional_count(row.counts.bugfix),
            Self::optional_count(row.counts.enhancement),
            row.score.to_string(),
        ]);
        fields.extend(Self::trailing_fields(&row.metadata));
        fields
    }

    /// Field values of an advanced row, in column order
    pub fn advanced_fields(row: &AdvancedCurrencyRow) -> Vec<String> {
        let counts = &row.counts;
        let mut fields = Self::leading_fields(&row.metadata);
        fields.extend(
            [
                counts.critical,
                counts.important,
                counts.moderate,
                counts.low,
                counts.bugfix,
                counts.enhancement,
                row.score,
            ]
            .iter()
            .map(u64::to_string),
        );
        fields.extend(Self::trailing_fields(&row.metadata));
        fields
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    fn header(&self, mode: ReportMode) -> String {
        match mode {
            ReportMode::Simple => SIMPLE_COLUMNS.join(","),
            ReportMode::Advanced => ADVANCED_COLUMNS.join(","),
        }
    }

    fn format_simple_row(&self, row: &SimpleCurrencyRow) -> String {
        Self::simple_fields(row).join(",")
    }

    fn format_advanced_row(&self, row: &AdvancedCurrencyRow) -> String {
        Self::advanced_fields(row).join(",")
    }
}
