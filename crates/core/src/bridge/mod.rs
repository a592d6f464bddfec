//! External process invocation.
//!
//! [`ProcessBridge`] launches a fixed command with the caller's text passed
//! as `--input <text>`, drains stdout and stderr until the child exits, and
//! resolves to an [`Invocation`] or a [`BridgeError`]. There is no timeout,
//! no cancellation and no partial output: each call is all-or-nothing.

pub mod command;
pub mod executor;
pub mod subprocess;

pub use command::BridgeCommand;
pub use executor::{BridgeError, Invocation, ProcessBridge};

/// Shared test helpers for bridge tests.
#[cfg(test)]
pub(crate) mod test_helpers {
    use super::BridgeCommand;

    /// Build a command that runs `script` under `sh -c`.
    ///
    /// The bridge appends `--input <text>`, so inside the script `$1` is the
    /// literal `--input` flag and `$2` is the caller's text.
    pub fn sh(script: &str) -> BridgeCommand {
        BridgeCommand {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string(), "sh".to_string()],
            working_directory: None,
        }
    }
}
