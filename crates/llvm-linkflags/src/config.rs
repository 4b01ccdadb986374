use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::libs;
use crate::sh::{self, RunOptions, StreamMode};

/// How the installed LLVM was built, as reported by `llvm-config --shared-mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linkage {
    Static,
    Shared,
}

impl Linkage {
    /// Anything other than the literal `static` counts as shared.
    pub fn from_output(output: &str) -> Self {
        if output.trim() == "static" {
            Linkage::Static
        } else {
            Linkage::Shared
        }
    }

    pub fn is_static(self) -> bool {
        self == Linkage::Static
    }
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Linkage::Static => f.write_str("static"),
            Linkage::Shared => f.write_str("shared"),
        }
    }
}

/// Handle to one `llvm-config` executable.
#[derive(Debug, Clone)]
pub struct LlvmConfig {
    path: PathBuf,
    options: RunOptions,
}

impl LlvmConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            options: RunOptions::default(),
        }
    }

    /// Stdout is always piped; the caller's stdout mode is ignored.
    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = RunOptions {
            stdout: StreamMode::Pipe,
            ..options
        };
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run the tool with a single flag and return its stdout.
    pub fn query(&self, flag: &str) -> Result<String> {
        let out = sh::run(&self.path, [flag], &self.options)
            .with_context(|| format!("{} {flag}", self.path.display()))?;
        Ok(out.stdout)
    }

    /// `--libs`: the LLVM component libraries as linker flags.
    pub fn libs(&self) -> Result<Vec<String>> {
        self.query_tokens("--libs")
    }

    /// `--system-libs`: the system libraries LLVM itself depends on.
    pub fn system_libs(&self) -> Result<Vec<String>> {
        self.query_tokens("--system-libs")
    }

    pub fn shared_mode(&self) -> Result<Linkage> {
        let linkage = Linkage::from_output(&self.query("--shared-mode")?);
        log::info!("{} reports {} linkage", self.path.display(), linkage);
        Ok(linkage)
    }

    fn query_tokens(&self, flag: &str) -> Result<Vec<String>> {
        let out = self.query(flag)?;
        Ok(libs::tokens(&out).map(str::to_string).collect())
    }
}
