/// Crate-wide Result alias. Typed failures are `CurrencyError` values
/// carried inside `anyhow::Error` so callers can downcast when needed.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
