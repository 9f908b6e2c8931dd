//! Implementation of the build command.
//!
//! Resolves the requested configuration into one xfbuild invocation, runs
//! it, and reports the outcome.

use std::time::Instant;

use anyhow::Result;
use tracing::debug;

use xfb_lib::command::CommandLine;
use xfb_lib::config::BuildConfig;
use xfb_lib::execute;
use xfb_lib::platform::Os;

use crate::output::{format_duration, print_info, print_success};

/// Execute the build command.
///
/// Detects the host OS, assembles the xfbuild invocation for `config`, runs
/// it, and reports a timed summary.
///
/// # Arguments
///
/// * `config` - Resolved build configuration from the command line.
/// * `verbose` - If true, print the assembled command after the status line.
/// * `dry_run` - If true, print the assembled command and skip the build.
///
/// # Errors
///
/// Returns an error for an unknown target, an unsupported compiler or host
/// OS, a tool that cannot be launched, or a build that exits nonzero.
pub fn cmd_build(config: &BuildConfig, verbose: bool, dry_run: bool) -> Result<()> {
  let os = Os::detect()?;
  let command = CommandLine::assemble(config, os)?;

  if dry_run {
    println!("{}", command.rendered());
    return Ok(());
  }

  print_info(&format!("Building {}...", command.target().name));
  if verbose {
    println!("{}", command.rendered());
  }

  let start = Instant::now();
  execute::run(&command)?;
  let elapsed = start.elapsed();

  debug!(elapsed_ms = elapsed.as_millis() as u64, "build finished");
  print_success(&format!("Built {} in {}", command.target().name, format_duration(elapsed)));

  Ok(())
}
