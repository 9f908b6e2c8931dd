//! Command-line assembly for xfbuild invocations.
//!
//! Assembly is pure: given a configuration and a host OS it produces the
//! exact token sequence, so the full matrix is testable without spawning
//! anything.

use tracing::debug;

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::platform::Os;
use crate::targets::{self, Target};
use crate::toolchain::{Compiler, Mode};

/// The external build tool every command drives.
pub const TOOL: &str = "xfbuild";

/// Directory the produced binaries land in, relative to the build directory.
const BIN_DIR: &str = "../bin";

/// Surface warnings from the underlying compiler.
const WARNINGS_FLAG: &str = "-w";

/// Derives the identifier namespacing one configuration's artifact
/// directories.
///
/// Builds that differ in target, host OS, compiler, or mode get distinct
/// identifiers, so their intermediate files never collide.
pub fn build_id(target: &Target, os: Os, compiler: Compiler, mode: Mode) -> String {
  format!("{}-{}-{}-{}", target.name, os, compiler, mode)
}

/// A fully assembled xfbuild invocation.
///
/// Write-once: assembled from a [`BuildConfig`] and handed to
/// [`crate::execute::run`] without further mutation.
#[derive(Debug, Clone)]
pub struct CommandLine {
  pub(crate) target: &'static Target,
  pub(crate) program: &'static str,
  pub(crate) args: Vec<String>,
}

impl CommandLine {
  /// Assembles the full invocation for the given configuration and host.
  ///
  /// Fails on an unknown target or unsupported compiler; nothing is spawned
  /// here.
  pub fn assemble(config: &BuildConfig, os: Os) -> Result<Self, BuildError> {
    let target = targets::resolve_or_default(config.target.as_deref())?;
    let compiler = Compiler::parse(&config.compiler)?;
    let flags = compiler.flags();
    let id = build_id(target, os, compiler, config.mode);
    let style = os.path_style();

    debug!(id = %id, "derived build identifier");

    let mut args = Vec::new();
    args.push(WARNINGS_FLAG.to_string());
    for dir in &config.include_dirs {
      args.push(style.rewrite(&format!("-I{dir}")));
    }
    args.push(format!("+D.deps-{id}"));
    args.push(format!("+O.objs-{id}"));
    if let Some(ext) = os.object_extension() {
      args.push(format!("+C{ext}"));
    }
    args.extend(flags.base.iter().map(|flag| flag.to_string()));
    args.extend(flags.mode_flags(config.mode).iter().map(|flag| flag.to_string()));
    args.push(style.rewrite(&format!("+o{BIN_DIR}/{}{}", target.name, os.exe_suffix())));
    args.push(style.rewrite(target.entry));
    // Pass-through tokens go last and are never rewritten.
    args.extend(config.passthrough.iter().cloned());

    Ok(Self { target, program: TOOL, args })
  }

  /// The target this command builds.
  pub fn target(&self) -> &Target {
    self.target
  }

  /// The executable to spawn.
  pub fn program(&self) -> &str {
    self.program
  }

  /// The argument list, in assembly order.
  pub fn args(&self) -> &[String] {
    &self.args
  }

  /// Single-line rendering for display and logs.
  pub fn rendered(&self) -> String {
    let mut line = self.program.to_string();
    for arg in &self.args {
      line.push(' ');
      line.push_str(arg);
    }
    line
  }
}
