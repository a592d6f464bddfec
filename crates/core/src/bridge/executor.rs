//! The bridge itself and its result/error types.

use serde::{Deserialize, Serialize};

use super::command::BridgeCommand;
use super::subprocess;

/// Successful invocation: the child's complete stdout and the input it was
/// given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub output: String,
    pub input: String,
}

/// Why an invocation did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The process could not be started, or its pipes could not be read.
    #[error(transparent)]
    Launch(#[from] std::io::Error),

    /// The process ran but exited with a non-zero code (or was killed).
    #[error("subprocess failed: {stderr}")]
    Failed {
        /// Process exit code (`-1` if killed by signal).
        exit_code: i32,
        /// Captured stderr output.
        stderr: String,
    },
}

/// Launches one external process per call to [`ProcessBridge::invoke`].
///
/// Holds no per-invocation state, so a single bridge can be shared across
/// concurrent requests; every call gets its own child and its own buffers.
#[derive(Debug, Clone, Default)]
pub struct ProcessBridge {
    command: BridgeCommand,
}

impl ProcessBridge {
    pub fn new(command: BridgeCommand) -> Self {
        Self { command }
    }

    /// The command line this bridge launches.
    pub fn command(&self) -> &BridgeCommand {
        &self.command
    }

    /// Run the external process with `input` and wait for it to exit.
    ///
    /// Exit code 0 resolves to `{ output: stdout, input }`. Any other exit
    /// yields [`BridgeError::Failed`] with the captured stderr. Spawn
    /// failures are returned as [`BridgeError::Launch`].
    pub async fn invoke(&self, input: &str) -> Result<Invocation, BridgeError> {
        let mut cmd = self.command.build(input);
        let captured = subprocess::run_command(&mut cmd).await?;

        if captured.exit_code != 0 {
            return Err(BridgeError::Failed {
                exit_code: captured.exit_code,
                stderr: captured.stderr,
            });
        }

        Ok(Invocation {
            output: captured.stdout,
            input: input.to_string(),
        })
    }
}
