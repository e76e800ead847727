use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigFile;
use crate::currency_scoring::domain::ReportMode;
use crate::shared::error::CurrencyError;
use crate::shared::Result;

pub const DEFAULT_SERVER: &str = "localhost";

/// Satellite 6 version of 'spacewalk-report system-currency'
#[derive(Parser, Debug)]
#[command(name = "sat6-currency")]
#[command(version)]
#[command(
    about = "Satellite 6 version of 'spacewalk-report system-currency'",
    long_about = None
)]
pub struct Args {
    /// Divide security errata by severity. Note: this queries errata per
    /// host and is significantly slower
    #[arg(short, long)]
    pub advanced: bool,

    /// Satellite server (defaults to localhost)
    #[arg(short = 'n', long, value_parser = parse_server)]
    pub server: Option<String>,

    /// Username to access Satellite
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password to access Satellite. The user will be asked interactively if
    /// password is not provided
    #[arg(short, long)]
    pub password: Option<String>,

    /// Search string for hosts (like ?search=lifecycle_environment=Test)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Config file path (defaults to ./sat6-currency.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// Settings after merging CLI flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArgs {
    pub server: String,
    pub username: String,
    /// None means: prompt for it
    pub password: Option<String>,
    pub search: String,
    pub mode: ReportMode,
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Merges CLI flags with the config file. CLI flags win; the advanced
    /// flag is on if either source turns it on.
    pub fn resolve(self, config: Option<ConfigFile>) -> Result<ResolvedArgs> {
        let config = config.unwrap_or_default();

        let server = self
            .server
            .or(config.server.map(|s| s.trim().to_lowercase()))
            .unwrap_or_else(|| DEFAULT_SERVER.to_string());
        let username = self
            .username
            .or(config.username)
            .ok_or(CurrencyError::MissingUsername)?;
        let search = self.search.or(config.search).unwrap_or_default();
        let advanced = self.advanced || config.advanced.unwrap_or(false);

        Ok(ResolvedArgs {
            server,
            username,
            password: self.password,
            search,
            mode: if advanced {
                ReportMode::Advanced
            } else {
                ReportMode::Simple
            },
            quiet: self.quiet,
        })
    }
}

/// Server names are case-insensitive; normalise to lower case
fn parse_server(value: &str) -> std::result::Result<String, String> {
    let server = value.trim();
    if server.is_empty() {
        return Err("server must not be empty".to_string());
    }
    Ok(server.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("sat6-currency").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_parse_short_flags() {
        let args = parse(&["-a", "-n", "Satellite.Example.COM", "-u", "admin", "-p", "pw", "-s", "?search=os=RHEL"]);
        assert!(args.advanced);
        assert_eq!(args.server.as_deref(), Some("satellite.example.com"));
        assert_eq!(args.username.as_deref(), Some("admin"));
        assert_eq!(args.password.as_deref(), Some("pw"));
        assert_eq!(args.search.as_deref(), Some("?search=os=RHEL"));
        assert!(!args.quiet);
    }

    #[test]
    fn test_parse_long_flags() {
        let args = parse(&["--advanced", "--server", "sat", "--username", "u", "--search", "", "--quiet"]);
        assert!(args.advanced);
        assert_eq!(args.server.as_deref(), Some("sat"));
        assert_eq!(args.search.as_deref(), Some(""));
        assert!(args.quiet);
    }

    #[test]
    fn test_parse_empty_server_rejected() {
        let result = Args::try_parse_from(["sat6-currency", "-n", " ", "-u", "admin"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_defaults() {
        let resolved = parse(&["-u", "admin"]).resolve(None).unwrap();
        assert_eq!(resolved.server, "localhost");
        assert_eq!(resolved.username, "admin");
        assert_eq!(resolved.password, None);
        assert_eq!(resolved.search, "");
        assert_eq!(resolved.mode, ReportMode::Simple);
    }

    #[test]
    fn test_resolve_missing_username() {
        let err = parse(&[]).resolve(None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CurrencyError>(),
            Some(CurrencyError::MissingUsername)
        ));
    }

    #[test]
    fn test_resolve_from_config() {
        let config = ConfigFile {
            server: Some("Sat.Example.com".to_string()),
            username: Some("reporter".to_string()),
            search: Some("?search=lifecycle_environment=Test".to_string()),
            advanced: Some(true),
            ..ConfigFile::default()
        };
        let resolved = parse(&[]).resolve(Some(config)).unwrap();
        assert_eq!(resolved.server, "sat.example.com");
        assert_eq!(resolved.username, "reporter");
        assert_eq!(resolved.search, "?search=lifecycle_environment=Test");
        assert_eq!(resolved.mode, ReportMode::Advanced);
    }

    #[test]
    fn test_resolve_cli_overrides_config() {
        let config = ConfigFile {
            server: Some("config-sat".to_string()),
            username: Some("config-user".to_string()),
            search: Some("?search=a".to_string()),
            advanced: Some(false),
            ..ConfigFile::default()
        };
        let resolved = parse(&["-n", "cli-sat", "-u", "cli-user", "-s", "?search=b", "-a"])
            .resolve(Some(config))
            .unwrap();
        assert_eq!(resolved.server, "cli-sat");
        assert_eq!(resolved.username, "cli-user");
        assert_eq!(resolved.search, "?search=b");
        assert_eq!(resolved.mode, ReportMode::Advanced);
    }
}
