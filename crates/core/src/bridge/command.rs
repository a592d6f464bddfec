//! The fixed command line a [`super::ProcessBridge`] launches.

use std::path::PathBuf;

use serde::Serialize;
use tokio::process::Command;

/// Flag that carries the caller's text on the child's command line.
pub const INPUT_FLAG: &str = "--input";

/// Python module run by the default command.
pub const DEFAULT_MODULE: &str = "processor.main";

/// Interpreter used by the default command.
pub const DEFAULT_PROGRAM: &str = "python";

/// Program, arguments and working directory of the external process.
///
/// The input text is never part of this struct; it is appended per
/// invocation by [`BridgeCommand::build`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BridgeCommand {
    /// Executable name or path, resolved through `PATH` when relative.
    pub program: String,
    /// Arguments placed before `--input <text>`.
    pub args: Vec<String>,
    /// Working directory of the child (inherits the server's when `None`).
    pub working_directory: Option<PathBuf>,
}

impl BridgeCommand {
    /// `python -m <module>`, run from the `python` directory that sits next
    /// to the server's current directory.
    pub fn python_module(module: &str) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: vec!["-m".to_string(), module.to_string()],
            working_directory: Some(PathBuf::from("..").join("python")),
        }
    }

    /// Build a [`Command`] for one invocation with `input` as the value of
    /// `--input`.
    pub fn build(&self, input: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).arg(INPUT_FLAG).arg(input);
        if let Some(dir) = &self.working_directory {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl Default for BridgeCommand {
    fn default() -> Self {
        Self::python_module(DEFAULT_MODULE)
    }
}
