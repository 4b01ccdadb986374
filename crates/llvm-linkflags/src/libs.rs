//! Rewriting `-l<name>` linker flags into concrete library files.
//!
//! Only a leading `-l` is rewritten. The library suffix is appended to every
//! token, with or without the prefix.

use std::path::Path;

use anyhow::Result;

use crate::config::LlvmConfig;
use crate::target::TargetConfig;

pub const LIB_FLAG: &str = "-l";
pub const STATIC_SUFFIX: &str = ".a";
pub const SHARED_SUFFIX: &str = ".so";

/// `-lLLVMCore` -> `libLLVMCore.a`
pub fn static_archive(token: &str) -> String {
    match token.strip_prefix(LIB_FLAG) {
        Some(name) => format!("lib{name}{STATIC_SUFFIX}"),
        None => format!("{token}{STATIC_SUFFIX}"),
    }
}

/// `-lz` -> `<libdir>/libz.so`
pub fn shared_object(token: &str, libdir: &Path) -> String {
    match token.strip_prefix(LIB_FLAG) {
        Some(name) => libdir
            .join(format!("lib{name}{SHARED_SUFFIX}"))
            .to_string_lossy()
            .into_owned(),
        None => format!("{token}{SHARED_SUFFIX}"),
    }
}

/// Split tool output into library tokens. Newlines separate tokens like any
/// other whitespace and empty tokens are dropped.
pub fn tokens(output: &str) -> impl Iterator<Item = &str> {
    output.split_whitespace()
}

impl LlvmConfig {
    /// LLVM component libraries as static archive names, or `None` when the
    /// installation is not statically linked.
    pub fn static_libs(&self) -> Result<Option<Vec<String>>> {
        let libs = self.libs()?;
        if !self.shared_mode()?.is_static() {
            log::debug!("not a static LLVM, no archives to link");
            return Ok(None);
        }

        Ok(Some(libs.iter().map(|lib| static_archive(lib)).collect()))
    }

    /// System libraries as absolute shared-object paths under the target's
    /// multiarch directory, followed by the static libstdc++ archive. `None`
    /// when the installation is not statically linked.
    pub fn static_system_libs(&self, target: &TargetConfig) -> Result<Option<Vec<String>>> {
        let system_libs = self.system_libs()?;
        if !self.shared_mode()?.is_static() {
            log::debug!("not a static LLVM, no system libraries to link");
            return Ok(None);
        }

        let libdir = target.system_lib_dir();
        let mut out: Vec<String> = system_libs
            .iter()
            .map(|lib| shared_object(lib, &libdir))
            .collect();
        out.push(target.static_libstdcxx().to_string_lossy().into_owned());
        Ok(Some(out))
    }
}
