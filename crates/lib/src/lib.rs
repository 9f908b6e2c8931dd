//! xfb-lib: Core types and logic for the xfb build driver
//!
//! This crate provides the pieces the `xfb` binary glues together:
//! - `targets`: the fixed registry of buildable targets
//! - `toolchain`: flag policy for the supported compiler backends
//! - `platform`: host OS detection and path conventions
//! - `config`: the resolved choices for one invocation
//! - `command`: assembly of one full xfbuild command line
//! - `execute`: running the assembled command and reporting failure

pub mod command;
pub mod config;
pub mod error;
pub mod execute;
pub mod platform;
pub mod targets;
pub mod toolchain;
