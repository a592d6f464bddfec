//! Spawn + capture.
//!
//! Provides [`run_command`], which launches a prepared [`Command`], drains
//! both output pipes concurrently and waits for exit. Interpreting the exit
//! code is left to the caller.

use std::process::Stdio;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

/// Everything a finished child wrote, plus how it exited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Complete stdout, decoded as UTF-8 (lossy).
    pub stdout: String,
    /// Complete stderr, decoded as UTF-8 (lossy).
    pub stderr: String,
    /// Process exit code (`-1` if killed by signal).
    pub exit_code: i32,
}

/// Spawn `cmd`, capture its stdout/stderr and wait for it to exit.
///
/// Stdin is closed immediately; input travels on the command line. Both
/// pipes are read while waiting so a chatty child never blocks on a full
/// pipe buffer. The child is not killed if this future is dropped.
pub async fn run_command(cmd: &mut Command) -> std::io::Result<CapturedOutput> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn()?;

    let stdout_handle = child.stdout.take();
    let stderr_handle = child.stderr.take();

    let (status, stdout_bytes, stderr_bytes) = tokio::try_join!(
        child.wait(),
        read_stream(stdout_handle),
        read_stream(stderr_handle),
    )?;

    Ok(CapturedOutput {
        stdout: String::from_utf8_lossy(&stdout_bytes).into_owned(),
        stderr: String::from_utf8_lossy(&stderr_bytes).into_owned(),
        exit_code: status.code().unwrap_or(-1),
    })
}

/// Read an entire output stream into a byte buffer.
async fn read_stream<R: AsyncRead + Unpin>(handle: Option<R>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut h) = handle {
        h.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}
