//! Running HandBrakeCLI at reduced priority with merged output capture.

use crate::job::EncodeJob;
use crate::tools::{get_tool_path, HANDBRAKE, NICE};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Exit status and combined stdout/stderr of one encoder run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit code, `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    /// Everything the process wrote to stdout and stderr (lossy UTF-8).
    pub output: String,
}

impl ExecutionResult {
    pub fn new(exit_code: Option<i32>, output: impl Into<String>) -> Self {
        Self {
            exit_code,
            output: output.into(),
        }
    }

    /// Whether the process exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Something that can execute an [`EncodeJob`].
///
/// Implementations block until the job's process has exited.
pub trait JobRunner {
    /// Run the job and capture its output.
    ///
    /// A non-zero exit status is not an error; only failing to launch or read
    /// from the process is.
    fn run(&self, job: &EncodeJob) -> Result<ExecutionResult>;
}

/// Runs `nice -n <priority> HandBrakeCLI --verbose -i <input> -o <output> <args...>`.
///
/// No shell is involved. There is no timeout: a hung encoder blocks the
/// caller until it exits.
#[derive(Debug, Clone)]
pub struct HandBrakeRunner {
    handbrake: PathBuf,
    nice: PathBuf,
}

impl HandBrakeRunner {
    /// Create a runner from explicit executable paths.
    pub fn new(handbrake: impl Into<PathBuf>, nice: impl Into<PathBuf>) -> Self {
        Self {
            handbrake: handbrake.into(),
            nice: nice.into(),
        }
    }

    /// Resolve both executables, preferring configured paths over `PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolNotFound`] if either tool cannot be located.
    pub fn discover(handbrake_path: Option<&Path>, nice_path: Option<&Path>) -> Result<Self> {
        Ok(Self {
            handbrake: get_tool_path(HANDBRAKE, handbrake_path)?,
            nice: get_tool_path(NICE, nice_path)?,
        })
    }

    pub fn handbrake(&self) -> &Path {
        &self.handbrake
    }

    pub fn nice(&self) -> &Path {
        &self.nice
    }

    fn command(&self, job: &EncodeJob) -> Command {
        let mut cmd = Command::new(&self.nice);
        cmd.arg("-n")
            .arg(job.priority().to_string())
            .arg(&self.handbrake)
            .args(job.handbrake_args())
            .stdin(Stdio::null());
        cmd
    }
}

impl JobRunner for HandBrakeRunner {
    fn run(&self, job: &EncodeJob) -> Result<ExecutionResult> {
        tracing::debug!("Command to be executed");
        tracing::debug!("{}", job.command_line(&self.handbrake));

        let (status, output) = run_merged(self.command(job), &self.nice)?;

        Ok(ExecutionResult {
            exit_code: status.code(),
            output: String::from_utf8_lossy(&output).into_owned(),
        })
    }
}

fn spawn_error(program: &Path, err: std::io::Error) -> Error {
    if err.kind() == std::io::ErrorKind::NotFound {
        Error::tool_not_found(program.display().to_string())
    } else {
        Error::tool_failed(
            program.display().to_string(),
            format!("failed to spawn: {err}"),
        )
    }
}

/// Open a pipe whose ends are close-on-exec from the start.
///
/// Only the child's stdout/stderr may hold the write end, so that EOF arrives
/// when the encoder exits. A process forked by another thread must not
/// inherit it either.
#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "openbsd",
    target_os = "illumos",
    target_os = "solaris"
))]
fn cloexec_pipe() -> std::io::Result<(std::os::fd::OwnedFd, std::os::fd::OwnedFd)> {
    Ok(nix::unistd::pipe2(nix::fcntl::OFlag::O_CLOEXEC)?)
}

// No pipe2 here: a fork racing between the two calls can briefly inherit the
// write end.
#[cfg(all(
    unix,
    not(any(
        target_os = "linux",
        target_os = "android",
        target_os = "freebsd",
        target_os = "dragonfly",
        target_os = "netbsd",
        target_os = "openbsd",
        target_os = "illumos",
        target_os = "solaris"
    ))
))]
fn cloexec_pipe() -> std::io::Result<(std::os::fd::OwnedFd, std::os::fd::OwnedFd)> {
    use nix::fcntl::{fcntl, FcntlArg, FdFlag};
    use std::os::fd::AsRawFd;

    let (reader, writer) = nix::unistd::pipe()?;
    for fd in [reader.as_raw_fd(), writer.as_raw_fd()] {
        fcntl(fd, FcntlArg::F_SETFD(FdFlag::FD_CLOEXEC))?;
    }
    Ok((reader, writer))
}

/// Run `cmd` with stdout and stderr writing into one pipe.
///
/// The pipe is drained while the child runs and the child is always reaped,
/// even when reading its output fails.
#[cfg(unix)]
fn run_merged(mut cmd: Command, program: &Path) -> Result<(ExitStatus, Vec<u8>)> {
    let (reader, writer) = cloexec_pipe()?;
    let writer_err = writer.try_clone()?;
    cmd.stdout(Stdio::from(writer)).stderr(Stdio::from(writer_err));

    let mut child = cmd.spawn().map_err(|e| spawn_error(program, e))?;
    // The command still owns our copies of the write end; reading would never
    // see EOF while they are open.
    drop(cmd);

    drain_then_wait(std::fs::File::from(reader), || child.wait())
}

/// Read `output` to EOF, then wait for the process that writes it.
///
/// The wait happens even when reading fails, so the child is never left
/// unreaped; the read error is reported after it.
#[cfg(unix)]
fn drain_then_wait<T>(
    mut output: impl std::io::Read,
    wait: impl FnOnce() -> std::io::Result<T>,
) -> Result<(T, Vec<u8>)> {
    let mut buf = Vec::new();
    let read = output.read_to_end(&mut buf);
    let status = wait()?;
    read?;

    Ok((status, buf))
}

#[cfg(not(unix))]
fn run_merged(mut cmd: Command, program: &Path) -> Result<(ExitStatus, Vec<u8>)> {
    let result = cmd.output().map_err(|e| spawn_error(program, e))?;

    let mut output = result.stdout;
    output.extend_from_slice(&result.stderr);

    Ok((result.status, output))
}
