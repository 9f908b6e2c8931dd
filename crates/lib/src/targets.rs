//! The fixed registry of buildable targets.

use crate::error::BuildError;

/// A named build target: the registry key plus the root source file handed
/// to xfbuild as the compilation entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
  pub name: &'static str,
  /// Entry file, relative to the build directory the tool runs from.
  pub entry: &'static str,
}

/// All known targets, in declaration order. The first entry is the default
/// when no target is selected explicitly.
pub const TARGETS: &[Target] = &[
  Target { name: "spinninglights", entry: "../src/SpinningLights.d" },
  Target { name: "viewer", entry: "../src/Viewer.d" },
];

/// Looks up a target by name.
pub fn resolve(name: &str) -> Result<&'static Target, BuildError> {
  TARGETS
    .iter()
    .find(|target| target.name == name)
    .ok_or_else(|| BuildError::UnknownTarget(name.to_string()))
}

/// Resolves the given name, or falls back to the first registered target.
pub fn resolve_or_default(name: Option<&str>) -> Result<&'static Target, BuildError> {
  match name {
    Some(name) => resolve(name),
    // TARGETS is a non-empty literal, so the first entry always exists.
    None => Ok(&TARGETS[0]),
  }
}
