//! Error types for build assembly and invocation.

use thiserror::Error;

/// Errors that can occur while assembling or running a build.
///
/// Every variant is fatal: the tool reports the error and exits. There is no
/// retry or partial-recovery path.
#[derive(Debug, Error)]
pub enum BuildError {
  /// The requested target is not in the registry.
  #[error("unknown target: {0}")]
  UnknownTarget(String),

  /// The requested compiler has no flag policy.
  #[error("compiler not supported: {0}")]
  UnsupportedCompiler(String),

  /// The host operating system is not one the tool can build on.
  #[error("operating system not supported: {0}")]
  UnsupportedOs(String),

  /// The build tool could not be started at all.
  #[error("failed to launch {tool}: {source}")]
  ToolLaunch {
    tool: String,
    #[source]
    source: std::io::Error,
  },

  /// The build tool ran and exited with a failure status.
  #[error("build failed with exit code {code:?}")]
  BuildFailed { code: Option<i32> },
}
