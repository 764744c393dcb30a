//! Child process execution of the Maven build.

use super::command::BuildCommand;
use crate::error::{BuildError, CliError, Result};
use path_absolutize::Absolutize;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Runs the build tool and waits for it to exit.
///
/// The child runs in `source` with inherited stdio so Maven's progress goes
/// straight to the terminal. `wrapper` is made absolute first because the
/// child's working directory differs from ours. On Windows the invocation
/// goes through `cmd /C` so the shell resolves the wrapper's `.cmd`
/// extension. There is no timeout.
///
/// # Returns
///
/// The child's exit status, uninterpreted. Only a failure to spawn or wait
/// is an error here.
pub async fn run_build(command: &BuildCommand, wrapper: &Path, source: &Path) -> Result<ExitStatus> {
    let wrapper = wrapper.absolutize()?;

    let mut cmd = if cfg!(windows) {
        let mut shell = Command::new("cmd");
        shell.arg("/C").arg(wrapper.as_os_str());
        shell
    } else {
        Command::new(wrapper.as_os_str())
    };

    cmd.args(command.args())
        .current_dir(source)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    log::debug!("Spawning {} in {}", wrapper.display(), source.display());

    let status = cmd.status().await.map_err(|e| {
        BuildError::Cli(CliError::ExecutionFailed {
            command: command.to_string(),
            reason: e.to_string(),
        })
    })?;

    log::info!("Build tool exited with {}", status);
    Ok(status)
}
