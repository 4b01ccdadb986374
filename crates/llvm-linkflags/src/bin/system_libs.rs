use std::io;
use std::path::PathBuf;

use clap::Parser;
use llvm_linkflags::target::DEFAULT_GCC_VERSION;
use llvm_linkflags::{emit, Format, LlvmConfig, TargetConfig};

/// Print the system libraries a static LLVM needs, as absolute paths,
/// followed by the static libstdc++ archive.
///
/// Prints nothing when LLVM is built as shared libraries.
#[derive(Parser)]
#[command(name = "llvm-system-libs", version)]
struct Cli {
    /// Path to the llvm-config executable
    #[arg(env = "LLVM_CONFIG")]
    llvm_config: PathBuf,

    /// Target architecture (e.g. x86_64, aarch64); libraries are looked up
    /// under /usr/lib/<arch>-linux-gnu
    arch: String,

    /// GCC major version providing libstdc++.a
    #[arg(long, default_value = DEFAULT_GCC_VERSION)]
    gcc_version: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Lines)]
    format: Format,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let target = TargetConfig::linux_gnu(cli.arch).with_gcc_version(cli.gcc_version);
    log::debug!("system libraries from {}", target.system_lib_dir().display());

    let libs = LlvmConfig::new(cli.llvm_config)
        .static_system_libs(&target)?
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
