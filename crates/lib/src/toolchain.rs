//! Per-compiler flag policy.
//!
//! Only two compiler backends are supported and their flag sets are fixed
//! policy data, so dispatch is a closed enum rather than anything dynamic.

use std::fmt;

use crate::error::BuildError;

/// Optimization mode selecting which flag set a build uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
  Release,
  Debug,
}

impl Mode {
  /// Returns the lowercase identifier used in build identifiers.
  pub fn as_str(&self) -> &'static str {
    match self {
      Mode::Release => "release",
      Mode::Debug => "debug",
    }
  }
}

impl fmt::Display for Mode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// The fixed flag sets for one compiler backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolchainFlags {
  /// Flags that select and configure the backend itself.
  pub base: &'static [&'static str],
  pub release: &'static [&'static str],
  pub debug: &'static [&'static str],
}

impl ToolchainFlags {
  /// Returns the flag set for the given mode.
  pub fn mode_flags(&self, mode: Mode) -> &'static [&'static str] {
    match mode {
      Mode::Release => self.release,
      Mode::Debug => self.debug,
    }
  }
}

// +modLimit1 is required because LDC does not optimize well otherwise. This
// is a toolchain bug that has not been tracked down yet.
const LDC: ToolchainFlags = ToolchainFlags {
  base: &["+cldc", "+q", "+modLimit1"],
  release: &["-O5", "-release"],
  debug: &["-gc", "-d-debug"],
};

const DMD: ToolchainFlags = ToolchainFlags {
  base: &["+cdmd"],
  release: &["-O", "-release"],
  debug: &["-gc", "-debug"],
};

/// Compiler backends xfbuild can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compiler {
  Ldc,
  Dmd,
}

impl Compiler {
  /// Parses a compiler identifier as given on the command line.
  pub fn parse(name: &str) -> Result<Self, BuildError> {
    match name {
      "ldc" => Ok(Compiler::Ldc),
      "dmd" => Ok(Compiler::Dmd),
      _ => Err(BuildError::UnsupportedCompiler(name.to_string())),
    }
  }

  /// Returns the lowercase identifier used in build identifiers.
  pub fn as_str(&self) -> &'static str {
    match self {
      Compiler::Ldc => "ldc",
      Compiler::Dmd => "dmd",
    }
  }

  /// Returns the flag policy for this compiler.
  pub fn flags(&self) -> &'static ToolchainFlags {
    match self {
      Compiler::Ldc => &LDC,
      Compiler::Dmd => &DMD,
    }
  }
}

impl fmt::Display for Compiler {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_accepts_supported_identifiers() {
    assert_eq!(Compiler::parse("ldc").unwrap(), Compiler::Ldc);
    assert_eq!(Compiler::parse("dmd").unwrap(), Compiler::Dmd);
  }

  #[test]
  fn parse_rejects_unknown_identifier() {
    let err = Compiler::parse("gdc").unwrap_err();
    assert!(matches!(err, BuildError::UnsupportedCompiler(ref name) if name == "gdc"));
    assert_eq!(err.to_string(), "compiler not supported: gdc");
  }

  #[test]
  fn parse_is_case_sensitive() {
    assert!(Compiler::parse("LDC").is_err());
  }

  #[test]
  fn flags_are_stable_across_calls() {
    assert_eq!(Compiler::Ldc.flags(), Compiler::Ldc.flags());
    assert_eq!(Compiler::Dmd.flags(), Compiler::Dmd.flags());
  }

  #[test]
  fn backends_have_distinct_flag_sets() {
    assert_ne!(LDC.base, DMD.base);
    assert_ne!(LDC.release, DMD.release);
    assert_ne!(LDC.debug, DMD.debug);
  }

  #[test]
  fn mode_selects_matching_flag_set() {
    let flags = Compiler::Ldc.flags();
    assert_eq!(flags.mode_flags(Mode::Release), flags.release);
    assert_eq!(flags.mode_flags(Mode::Debug), flags.debug);
  }
}
