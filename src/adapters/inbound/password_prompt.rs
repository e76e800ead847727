use crate::shared::Result;
use anyhow::Context;
use dialoguer::Password;

/// Asks for the API password on the terminal without echoing it.
///
/// An empty answer is accepted and sent as-is.
pub fn prompt_password(username: &str) -> Result<String> {
    Password::new()
        .with_prompt(format!("Password for {}", username))
        .allow_empty_password(true)
        .interact()
        .context("Failed to read password from the terminal")
}
