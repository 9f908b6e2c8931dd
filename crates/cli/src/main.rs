use clap::Parser;
use tracing_subscriber::EnvFilter;

use xfb_lib::config::BuildConfig;
use xfb_lib::toolchain::Mode;

mod cmd;
mod output;

/// xfb - Build driver for the bundled demo targets
///
/// Assembles one xfbuild invocation from the selected target, compiler, and
/// mode, then runs it. Unrecognized arguments are handed to xfbuild verbatim.
#[derive(Debug, Parser)]
#[command(name = "xfb")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Compiler backend to build with (ldc or dmd)
  #[arg(long, value_name = "COMPILER", default_value = "ldc")]
  compiler: String,

  /// Target to build (defaults to the first known target)
  #[arg(long, value_name = "TARGET")]
  target: Option<String>,

  /// Build in debug mode instead of release
  #[arg(long)]
  debug: bool,

  /// Print the assembled xfbuild command before running it
  #[arg(short, long)]
  verbose: bool,

  /// Print the assembled xfbuild command and exit without building
  #[arg(long)]
  dry_run: bool,

  /// Extra arguments passed through to xfbuild verbatim
  #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "TOOL_ARGS")]
  passthrough: Vec<String>,
}

impl Cli {
  fn to_config(&self) -> BuildConfig {
    BuildConfig {
      target: self.target.clone(),
      compiler: self.compiler.clone(),
      mode: if self.debug { Mode::Debug } else { Mode::Release },
      passthrough: self.passthrough.clone(),
      ..BuildConfig::default()
    }
  }
}

fn main() {
  // Initialize logging
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .without_time()
    .init();

  let cli = Cli::parse();

  if let Err(err) = cmd::cmd_build(&cli.to_config(), cli.verbose, cli.dry_run) {
    output::print_error(&format!("{err:#}"));
    std::process::exit(1);
  }
}
