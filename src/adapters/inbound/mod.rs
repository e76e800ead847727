/// Inbound adapters - interactive input from the terminal
mod password_prompt;

pub use password_prompt::prompt_password;
