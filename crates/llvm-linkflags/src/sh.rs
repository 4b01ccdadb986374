// Process execution for external toolchain utilities

use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use derive_builder::Builder;

/// Trait for types that can configure a `Command` before execution.
pub trait RunConfig {
    /// Apply configuration to the given `Command`.
    fn apply(&self, cmd: &mut Command);

    /// Whether the command line should be kept out of the debug log.
    fn quiet(&self) -> bool {
        false
    }
}

// Allow using `&T` where `T: RunConfig`.
impl<T: RunConfig + ?Sized> RunConfig for &T {
    fn apply(&self, cmd: &mut Command) {
        (*self).apply(cmd)
    }

    fn quiet(&self) -> bool {
        (*self).quiet()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamMode {
    Inherit,
    Pipe,
    Null,
}

impl StreamMode {
    fn stdio(self) -> Stdio {
        match self {
            StreamMode::Inherit => Stdio::inherit(),
            StreamMode::Pipe => Stdio::piped(),
            StreamMode::Null => Stdio::null(),
        }
    }
}

#[derive(Clone, Debug, Builder)]
#[builder(default)]
pub struct RunOptions {
    pub stdout: StreamMode,
    pub stderr: StreamMode,
    #[builder(setter(into, strip_option))]
    pub cwd: Option<PathBuf>,
    pub quiet: bool,
}

impl Default for RunOptions {
    /// Capture stdout, let the tool's diagnostics reach the user.
    fn default() -> Self {
        Self {
            stdout: StreamMode::Pipe,
            stderr: StreamMode::Inherit,
            cwd: None,
            quiet: false,
        }
    }
}

impl RunConfig for RunOptions {
    fn apply(&self, cmd: &mut Command) {
        cmd.stdout(self.stdout.stdio());
        cmd.stderr(self.stderr.stdio());

        if let Some(ref dir) = self.cwd {
            cmd.current_dir(dir);
        }
    }

    fn quiet(&self) -> bool {
        self.quiet
    }
}

#[derive(Debug)]
pub struct RunOutput {
    /// Captured stdout; empty unless stdout was piped.
    pub stdout: String,
}

/// Run `program` with `args` directly (no shell) and collect its stdout.
///
/// Fails if the program cannot be spawned, exits unsuccessfully, or writes
/// stdout that is not valid UTF-8.
pub fn run<P, I, S, O>(program: P, args: I, opts: O) -> Result<RunOutput>
where
    P: AsRef<OsStr>,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
    O: RunConfig,
{
    let program = program.as_ref();
    let mut command = Command::new(program);
    command.args(args);
    opts.apply(&mut command);

    let line = format!("{command:?}");
    if !opts.quiet() {
        log::debug!("[run] {}", line);
    }

    let output = command
        .output()
        .with_context(|| format!("failed to spawn {}", program.to_string_lossy()))?;

    if !output.status.success() {
        bail!(
            "Command failed: {}\nExit code: {:?}",
            line,
            output.status.code().unwrap_or(-1),
        );
    }

    let stdout = String::from_utf8(output.stdout)
        .with_context(|| format!("{line} wrote non-UTF-8 output"))?;

    Ok(RunOutput { stdout })
}
