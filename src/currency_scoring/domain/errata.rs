/// Kind of an erratum as reported by the errata API (`type` field)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrataType {
    Security,
    Bugfix,
    Enhancement,
    /// Any other type string; such errata are not counted
    Other(String),
}

impl ErrataType {
    /// Matching is exact: the API reports lower-case type names.
    pub fn parse(value: &str) -> Self {
        match value {
            "security" => ErrataType::Security,
            "bugfix" => ErrataType::Bugfix,
            "enhancement" => ErrataType::Enhancement,
            other => ErrataType::Other(other.to_string()),
        }
    }
}

/// Severity of a security erratum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Important,
    Moderate,
    Low,
    /// Missing, empty or unrecognised severity
    Unspecified,
}

impl Severity {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("Critical") => Severity::Critical,
            Some("Important") => Severity::Important,
            Some("Moderate") => Severity::Moderate,
            Some("Low") => Severity::Low,
            _ => Severity::Unspecified,
        }
    }
}

/// A single applicable erratum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Erratum {
    errata_type: ErrataType,
    severity: Severity,
}

impl Erratum {
    pub fn new(errata_type: ErrataType, severity: Severity) -> Self {
        Self {
            errata_type,
            severity,
        }
    }

    pub fn errata_type(&self) -> &ErrataType {
        &self.errata_type
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

/// Per-host errata listing.
///
/// Only built when the API response carried a `results` field; hosts
/// without one are not registered for content and have no listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrataListing {
    /// Whether the response carried a `total` field
    pub has_total: bool,
    pub errata: Vec<Erratum>,
}

impl ErrataListing {
    pub fn new(has_total: bool, errata: Vec<Erratum>) -> Self {
        Self { has_total, errata }
    }
}

/// Aggregate errata counts pre-computed by the server on the host record.
///
/// Any count can be null on the server side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrataCounts {
    pub security: Option<u64>,
    pub bugfix: Option<u64>,
    pub enhancement: Option<u64>,
}

impl ErrataCounts {
    pub fn new(security: Option<u64>, bugfix: Option<u64>, enhancement: Option<u64>) -> Self {
        Self {
            security,
            bugfix,
            enhancement,
        }
    }

    /// All three counts, or None if any of them is null
    pub fn complete(&self) -> Option<(u64, u64, u64)> {
        Some((self.security?, self.bugfix?, self.enhancement?))
    }
}

/// Errata counted client-side, with security errata split by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeverityCounts {
    pub critical: u64,
    pub important: u64,
    pub moderate: u64,
    pub low: u64,
    pub bugfix: u64,
    pub enhancement: u64,
}

impl SeverityCounts {
    /// Counts a host's errata. Security errata without a known severity
    /// and errata of other types are not counted.
    pub fn tally<'a, I>(errata: I) -> Self
    where
        I: IntoIterator<Item = &'a Erratum>,
    {
        let mut counts = Self::default();
        for erratum in errata {
            counts.record(erratum);
        }
        counts
    }

    fn record(&mut self, erratum: &Erratum) {
        match erratum.errata_type() {
            ErrataType::Security => match erratum.severity() {
                Severity::Critical => self.critical += 1,
                Severity::Important => self.important += 1,
                Severity::Moderate => self.moderate += 1,
                Severity::Low => self.low += 1,
                Severity::Unspecified => {}
            },
            ErrataType::Bugfix => self.bugfix += 1,
            ErrataType::Enhancement => self.enhancement += 1,
            ErrataType::Other(_) => {}
        }
    }
}
