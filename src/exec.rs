//! Runs option commands through the host shell.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

/// Prefix of the synthetic output returned when a command cannot run at all.
pub const ERROR_MARKER: &str = "ERROR: ";

/// Runs `command` with `sh -c` and returns its standard output.
///
/// Standard error is discarded and a non-zero exit status is not an error.
/// If the shell itself cannot be started the result is `ERROR_MARKER`
/// followed by the failure, so callers always get something to compare.
pub fn run_shell(command: &str, cwd: Option<&Path>) -> String {
    let mut shell = Command::new("sh");
    shell
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null());
    if let Some(dir) = cwd {
        shell.current_dir(dir);
    }

    debug!(command, cwd = ?cwd, "running option command");
    match shell.output() {
        Ok(output) => {
            if !output.status.success() {
                debug!(command, status = %output.status, "option command exited unsuccessfully");
            }
            String::from_utf8_lossy(&output.stdout).into_owned()
        }
        Err(err) => {
            debug!(command, error = %err, "option command failed to launch");
            format!("{ERROR_MARKER}{err}")
        }
    }
}
