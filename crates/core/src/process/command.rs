use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use super::output::{ProcessOutput, collect, drain};
use crate::error::{Error, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// One external tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.to_string_lossy().into_owned())
    }

    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn to_shell_command(&self) -> String {
        let mut cmd = quote(&self.program);
        for arg in &self.args {
            cmd.push(' ');
            cmd.push_str(&quote(arg));
        }
        cmd
    }

    /// Run to completion, capturing stdout and stderr.
    ///
    /// With a `timeout` the child is polled and killed once the limit
    /// passes; the run then fails with [`Error::Timeout`]. The same limit
    /// bounds reading its output, so a background process still holding the
    /// pipes after the child exits also ends in a timeout. Without one this
    /// blocks for as long as the tool does.
    pub fn execute(&self, timeout: Option<Duration>) -> Result<ProcessOutput> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        // Own process group, so the tool and anything it spawns die together
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        tracing::debug!("Spawning: {}", self.to_shell_command());
        let started = Instant::now();
        let mut child = cmd.spawn().map_err(|source| Error::SpawnError {
            program: self.program.clone(),
            source,
        })?;

        let stdout_stream = child.stdout.take().map(drain);
        let stderr_stream = child.stderr.take().map(drain);

        let status = match timeout {
            None => child.wait()?,
            Some(limit) => loop {
                if let Some(status) = child.try_wait()? {
                    break status;
                }
                if started.elapsed() >= limit {
                    tracing::warn!(
                        "'{}' exceeded {:?}, killing pid {}",
                        self.program,
                        limit,
                        child.id()
                    );
                    terminate(&mut child);
                    return Err(self.timed_out(limit));
                }
                thread::sleep(POLL_INTERVAL);
            },
        };

        let deadline = timeout.map(|limit| started + limit);
        let stdout = collect(stdout_stream, deadline);
        let stderr = collect(stderr_stream, deadline);

        let (Some(stdout), Some(stderr)) = (stdout, stderr) else {
            // collect only gives up when there is a deadline
            let limit = timeout.unwrap_or_default();
            tracing::warn!(
                "'{}' exited but its output was still open after {:?}, killing its group",
                self.program,
                limit
            );
            terminate(&mut child);
            return Err(self.timed_out(limit));
        };

        let output = ProcessOutput::from_parts(status, stdout, stderr);
        tracing::debug!(
            "'{}' finished with {:?} in {:?}",
            self.program,
            output.exit_code,
            started.elapsed()
        );
        Ok(output)
    }

    fn timed_out(&self, limit: Duration) -> Error {
        Error::Timeout {
            program: self.program.clone(),
            limit,
        }
    }
}

/// Kill the child and, on unix, every process left in its group. Reader
/// threads are left to finish on their own once the pipes close.
fn terminate(child: &mut Child) {
    #[cfg(unix)]
    {
        let kill_group = format!("kill -9 -{}", child.id());
        match Command::new("sh")
            .args(["-c", &kill_group])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
        {
            Ok(status) if status.success() => {}
            Ok(status) => tracing::debug!("'{}' exited with {}", kill_group, status),
            Err(e) => tracing::warn!("Failed to run '{}': {}", kill_group, e),
        }
    }

    if let Err(e) = child.kill() {
        tracing::debug!("Failed to kill pid {}: {}", child.id(), e);
    }
    if let Err(e) = child.wait() {
        tracing::debug!("Failed to reap pid {}: {}", child.id(), e);
    }
}

fn quote(arg: &str) -> String {
    if arg.is_empty() {
        "''".to_string()
    } else if arg.contains(' ') {
        format!("'{arg}'")
    } else {
        arg.to_string()
    }
}
