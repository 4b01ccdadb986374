use std::path::PathBuf;

/// GCC release whose `libstdc++.a` gets linked when nothing else is asked for.
pub const DEFAULT_GCC_VERSION: &str = "9";

/// Linux host a static LLVM gets linked on.
///
/// Directory names follow the Debian multiarch convention: {arch}-{os}-{abi}
#[derive(Debug, Clone)]
pub struct TargetConfig {
    pub arch: String,

    pub os: String,
    /// ABI (e.g., "gnu")
    pub abi: String,
    /// Major version of the GCC install providing libstdc++
    pub gcc_version: String,
}

impl TargetConfig {
    /// A `{arch}-linux-gnu` target with the default GCC version.
    pub fn linux_gnu(arch: impl Into<String>) -> Self {
        Self {
            arch: arch.into(),
            os: "linux".to_string(),
            abi: "gnu".to_string(),
            gcc_version: DEFAULT_GCC_VERSION.to_string(),
        }
    }

    pub fn with_gcc_version(mut self, version: impl Into<String>) -> Self {
        self.gcc_version = version.into();
        self
    }

    /// Format: {arch}-{os}-{abi}
    pub fn multiarch_triple(&self) -> String {
        format!("{}-{}-{}", self.arch, self.os, self.abi)
    }

    /// `/usr/lib/{triple}`
    pub fn system_lib_dir(&self) -> PathBuf {
        PathBuf::from("/usr/lib").join(self.multiarch_triple())
    }

    /// `/usr/lib/gcc/{triple}/{gcc_version}`
    pub fn gcc_lib_dir(&self) -> PathBuf {
        PathBuf::from("/usr/lib/gcc")
            .join(self.multiarch_triple())
            .join(&self.gcc_version)
    }

    pub fn static_libstdcxx(&self) -> PathBuf {
        self.gcc_lib_dir().join("libstdc++.a")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiarch_triple() {
        let t = TargetConfig::linux_gnu("x86_64");
        assert_eq!(t.multiarch_triple(), "x86_64-linux-gnu");
        assert_eq!(t.system_lib_dir(), PathBuf::from("/usr/lib/x86_64-linux-gnu"));
    }

    #[test]
    fn test_libstdcxx_path() {
        let t = TargetConfig::linux_gnu("aarch64");
        assert_eq!(
            t.static_libstdcxx(),
            PathBuf::from("/usr/lib/gcc/aarch64-linux-gnu/9/libstdc++.a")
        );

        let t = t.with_gcc_version("12");
        assert_eq!(
            t.static_libstdcxx(),
            PathBuf::from("/usr/lib/gcc/aarch64-linux-gnu/12/libstdc++.a")
        );
    }
}
