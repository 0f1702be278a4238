//! terminal-note library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Name used for the binary, the config directory and the log file.
pub const APP_NAME: &str = "terminal-note";
