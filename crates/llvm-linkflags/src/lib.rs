//! Linker inputs for programs that embed a statically built LLVM.
//!
//! `llvm-config` reports libraries as `-l` flags. When LLVM is built as
//! static archives, a build system that links by file needs those flags
//! turned into archive names (`libLLVMCore.a`) and the system libraries
//! turned into absolute paths. The `llvm-libs` and `llvm-system-libs`
//! binaries print those lists; a build script can call [`LlvmConfig`]
//! directly instead.

pub mod config;
pub mod emit;
pub mod libs;
pub mod sh;
pub mod target;

pub use config::{Linkage, LlvmConfig};
pub use emit::Format;
pub use target::TargetConfig;

/// `env_logger` with `warn` as the default filter, writing to stderr.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
