/// Enroll - Two-Step Registration Wizard (TUI Edition)
///
/// Core library providing the registration wizard state machine,
/// field validation, and the terminal interface that drives them.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
