//! Build configuration resolved from the command line.

use crate::toolchain::Mode;

/// Include directories every build searches, relative to the build directory.
pub const DEFAULT_INCLUDE_DIRS: &[&str] = &["../libs/dAssimp", "../libs/derelict", "../src"];

/// The resolved set of choices for one invocation.
///
/// Built once from defaults overridden by command-line flags, then consumed
/// by assembly. Verbosity and dry-run live in the CLI layer since they only
/// change what gets printed, not what gets assembled.
#[derive(Debug, Clone)]
pub struct BuildConfig {
  /// Registry key to build, or `None` for the first registered target.
  pub target: Option<String>,

  /// Compiler identifier, checked against the supported set during assembly.
  pub compiler: String,

  /// Optimization mode selecting one of the two toolchain flag sets.
  pub mode: Mode,

  /// Include-search directories passed as `-I` flags, in order.
  pub include_dirs: Vec<String>,

  /// Unrecognized CLI tokens, forwarded verbatim at the end of the command.
  pub passthrough: Vec<String>,
}

impl Default for BuildConfig {
  fn default() -> Self {
    Self {
      target: None,
      compiler: "ldc".to_string(),
      mode: Mode::Release,
      include_dirs: DEFAULT_INCLUDE_DIRS.iter().map(|dir| dir.to_string()).collect(),
      passthrough: Vec::new(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_the_source_tree() {
    let config = BuildConfig::default();
    assert_eq!(config.compiler, "ldc");
    assert_eq!(config.mode, Mode::Release);
    assert!(config.target.is_none());
    assert_eq!(config.include_dirs, vec!["../libs/dAssimp", "../libs/derelict", "../src"]);
    assert!(config.passthrough.is_empty());
  }
}
