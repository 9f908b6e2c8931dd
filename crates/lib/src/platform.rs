//! Host platform detection and path conventions.
//!
//! Path separators, executable suffixes, and object-file extensions differ
//! per OS. Assembly asks these capability queries instead of matching OS
//! names inline.

use std::fmt;

use crate::error::BuildError;

/// Operating systems the tool knows how to drive builds on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
  Linux,
  MacOs,
  Windows,
}

impl Os {
  /// Detect the current operating system at runtime.
  pub fn current() -> Option<Self> {
    match std::env::consts::OS {
      "linux" => Some(Self::Linux),
      "macos" => Some(Self::MacOs),
      "windows" => Some(Self::Windows),
      _ => None,
    }
  }

  /// Like [`Os::current`], but an unsupported host becomes a fatal error.
  pub fn detect() -> Result<Self, BuildError> {
    Self::current().ok_or_else(|| BuildError::UnsupportedOs(std::env::consts::OS.to_string()))
  }

  /// Returns the lowercase identifier used in build identifiers.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Linux => "linux",
      Self::MacOs => "darwin",
      Self::Windows => "windows",
    }
  }

  /// Separator convention for path tokens handed to the build tool.
  pub fn path_style(&self) -> PathStyle {
    match self {
      Self::Windows => PathStyle::Backslash,
      _ => PathStyle::Slash,
    }
  }

  /// Suffix the produced binary must carry, if any.
  pub fn exe_suffix(&self) -> &'static str {
    match self {
      Self::Windows => ".exe",
      _ => "",
    }
  }

  /// Object-file extension to force on hosts whose toolchains expect one.
  pub fn object_extension(&self) -> Option<&'static str> {
    match self {
      Self::Windows => Some(".obj"),
      _ => None,
    }
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Path separator convention for rendered command-line tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
  Slash,
  Backslash,
}

impl PathStyle {
  /// Rewrites the separators of a path-like token to this convention.
  pub fn rewrite(&self, token: &str) -> String {
    match self {
      PathStyle::Slash => token.to_string(),
      PathStyle::Backslash => token.replace('/', "\\"),
    }
  }
}
