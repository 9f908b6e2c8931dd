//! Child-process execution for assembled commands.

use std::process::Command;

use tracing::{debug, info};

use crate::command::CommandLine;
use crate::error::BuildError;

/// Runs the assembled command and blocks until the tool exits.
///
/// The child inherits stdin, stdout, and stderr, so compiler diagnostics
/// reach the terminal directly. A failed spawn and a nonzero exit are
/// distinct fatal errors. Nothing is retried, and artifact directories from
/// a failed attempt are left in place for inspection.
pub fn run(command: &CommandLine) -> Result<(), BuildError> {
  info!(command = %command.rendered(), "invoking build tool");

  let status = Command::new(command.program())
    .args(command.args())
    .status()
    .map_err(|source| BuildError::ToolLaunch { tool: command.program().to_string(), source })?;

  debug!(code = ?status.code(), "build tool exited");

  if !status.success() {
    return Err(BuildError::BuildFailed { code: status.code() });
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::targets::TARGETS;

  fn command(program: &'static str, args: &[&str]) -> CommandLine {
    CommandLine {
      target: &TARGETS[0],
      program,
      args: args.iter().map(|arg| arg.to_string()).collect(),
    }
  }

  #[test]
  #[cfg(unix)]
  fn zero_exit_is_success() {
    assert!(run(&command("true", &[])).is_ok());
  }

  #[test]
  #[cfg(unix)]
  fn nonzero_exit_reports_build_failure() {
    let err = run(&command("false", &[])).unwrap_err();
    assert!(matches!(err, BuildError::BuildFailed { code: Some(1) }));
    assert!(err.to_string().starts_with("build failed"));
  }

  #[test]
  fn missing_tool_reports_launch_failure() {
    let err = run(&command("xfb-no-such-tool", &[])).unwrap_err();
    assert!(matches!(err, BuildError::ToolLaunch { .. }));
    assert!(err.to_string().contains("failed to launch xfb-no-such-tool"));
  }
}
