use std::io::Read;
use std::process::ExitStatus;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;

/// Captured result of one finished child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was ended by a signal
    pub exit_code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn from_parts(status: ExitStatus, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self {
            exit_code: status.code(),
            success: status.success(),
            stdout: String::from_utf8_lossy(&stdout).into_owned(),
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        }
    }

    /// Standard output followed by standard error
    pub fn merged(&self) -> String {
        let mut merged = String::with_capacity(self.stdout.len() + self.stderr.len());
        merged.push_str(&self.stdout);
        merged.push_str(&self.stderr);
        merged
    }
}

/// Read a pipe to the end on a helper thread so a chatty child can never
/// block on a full pipe while we wait on its sibling stream. The bytes arrive
/// on the returned channel once every writer has closed the pipe.
pub(crate) fn drain<R>(mut stream: R) -> Receiver<Vec<u8>>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel(1);
    thread::spawn(move || {
        let mut buffer = Vec::new();
        if let Err(e) = stream.read_to_end(&mut buffer) {
            tracing::trace!("Stream closed early: {}", e);
        }
        if tx.send(buffer).is_err() {
            tracing::trace!("Stream outlived its reader");
        }
    });
    rx
}

/// Wait for a drained stream.
///
/// Returns `None` when `deadline` passes while something still holds the
/// pipe open, typically a background process the child left behind.
pub(crate) fn collect(
    stream: Option<Receiver<Vec<u8>>>,
    deadline: Option<Instant>,
) -> Option<Vec<u8>> {
    let Some(stream) = stream else {
        return Some(Vec::new());
    };

    let received = match deadline {
        None => stream.recv().ok(),
        Some(deadline) => {
            match stream.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                Ok(bytes) => Some(bytes),
                Err(RecvTimeoutError::Timeout) => return None,
                Err(RecvTimeoutError::Disconnected) => None,
            }
        }
    };
    Some(received.unwrap_or_default())
}
