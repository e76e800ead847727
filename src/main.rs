use sat6_currency::adapters::inbound::prompt_password;
use sat6_currency::adapters::outbound::console::{
    SilentProgressReporter, StderrProgressReporter, StdoutReportWriter,
};
use sat6_currency::adapters::outbound::formatters::CsvFormatter;
use sat6_currency::adapters::outbound::network::{Credentials, SatelliteClient};
use sat6_currency::application::dto::CurrencyReportRequest;
use sat6_currency::application::use_cases::GenerateCurrencyReportUseCase;
use sat6_currency::cli::{Args, ResolvedArgs};
use sat6_currency::config;
use sat6_currency::ports::inbound::CurrencyReportPort;
use sat6_currency::ports::outbound::ProgressReporter;
use sat6_currency::shared::error::{CurrencyError, ExitCode};
use sat6_currency::shared::Result;
use std::process;

fn main() {
    let exit_code = match run() {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            report_failure(&e);
            e.downcast_ref::<CurrencyError>()
                .map_or(ExitCode::Failure, CurrencyError::exit_code)
        }
    };
    process::exit(exit_code.as_i32());
}

fn report_failure(e: &anyhow::Error) {
    let connection_failure = e
        .downcast_ref::<CurrencyError>()
        .is_some_and(CurrencyError::is_connection_failure);

    if connection_failure {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| "sat6-currency".to_string());
        eprintln!(
            "{} Couldn't connect to the API, check connection or url",
            program
        );
        eprintln!("{}", e);
        return;
    }

    eprintln!("\n❌ An error occurred:\n");
    eprintln!("{}", e);

    // Display error chain
    for cause in e.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }
    eprintln!();
}

fn run() -> Result<()> {
    let mut args = Args::parse_args();

    let config_file = match args.config.take() {
        Some(path) => Some(config::load_config_from_path(&path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };
    let settings = args.resolve(config_file)?;

    let password = match settings.password.clone() {
        Some(password) => password,
        None => prompt_password(&settings.username)?,
    };

    if settings.quiet {
        generate(&settings, password, SilentProgressReporter::new())
    } else {
        generate(&settings, password, StderrProgressReporter::new())
    }
}

fn generate<PR: ProgressReporter>(
    settings: &ResolvedArgs,
    password: String,
    progress_reporter: PR,
) -> Result<()> {
    // Create adapters (Dependency Injection)
    let credentials = Credentials::new(settings.username.clone(), password);
    let satellite_client = SatelliteClient::new(&settings.server, credentials)?;

    let use_case = GenerateCurrencyReportUseCase::new(
        satellite_client,
        CsvFormatter::new(),
        StdoutReportWriter::new(),
        progress_reporter,
    );

    let request = CurrencyReportRequest::new(settings.mode, settings.search.clone());
    use_case.generate_report(request)?;

    Ok(())
}
