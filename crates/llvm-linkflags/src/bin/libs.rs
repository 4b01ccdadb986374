use std::io;
use std::path::PathBuf;

use clap::Parser;
use llvm_linkflags::{emit, Format, LlvmConfig};

/// Print the static LLVM archives to link, one per line.
///
/// Prints nothing when LLVM is built as shared libraries.
#[derive(Parser)]
#[command(name = "llvm-libs", version)]
struct Cli {
    /// Path to the llvm-config executable
    #[arg(env = "LLVM_CONFIG")]
    llvm_config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Lines)]
    format: Format,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let libs = LlvmConfig::new(cli.llvm_config)
        .static_libs()?
        .unwrap_or_default();
    emit::write_entries(&mut io::stdout().lock(), &libs, cli.format)
}

fn main() {
    llvm_linkflags::init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
