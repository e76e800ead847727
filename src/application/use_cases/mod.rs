/// Use cases module containing application business logic orchestration
mod generate_currency_report;

pub use generate_currency_report::GenerateCurrencyReportUseCase;
