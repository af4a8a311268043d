use super::ConvertError;
use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::warn;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Exit status and captured stderr of a finished child
#[derive(Debug)]
pub struct ProcessOutput {
    pub status: ExitStatus,
    pub stderr: String,
}

/// Run `command` to completion, killing it once `timeout` elapses
///
/// Stdin and stdout are discarded; stderr is drained on a helper thread so
/// a chatty child cannot block on a full pipe. On unix the child leads its
/// own process group and a kill reaches everything it spawned. A timeout
/// too large to represent as a deadline means no deadline.
pub fn run_with_timeout(
    command: &mut Command,
    timeout: Duration,
) -> Result<ProcessOutput, ConvertError> {
    let program = command.get_program().to_string_lossy().into_owned();
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped());
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }
    let mut child = command.spawn().map_err(|source| ConvertError::Spawn {
        program: program.clone(),
        source,
    })?;

    let stderr_reader = child.stderr.take().map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = pipe.read_to_end(&mut buf);
            String::from_utf8_lossy(&buf).into_owned()
        })
    });

    let deadline = Instant::now().checked_add(timeout);
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {}
            Err(e) => {
                terminate(&mut child);
                join_reader(stderr_reader);
                return Err(e.into());
            }
        }
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            warn!(program = %program, ?timeout, "converter timed out, killing");
            terminate(&mut child);
            join_reader(stderr_reader);
            return Err(ConvertError::TimedOut(timeout));
        }
        thread::sleep(POLL_INTERVAL);
    };

    let stderr = join_reader(stderr_reader);
    Ok(ProcessOutput { status, stderr })
}

/// Kill the child with its whole process group and reap it
fn terminate(child: &mut Child) {
    #[cfg(unix)]
    {
        if let Ok(group) = libc::pid_t::try_from(child.id()) {
            // SAFETY: killpg has no memory-safety preconditions
            unsafe {
                libc::killpg(group, libc::SIGKILL);
            }
        }
    }
    let _ = child.kill();
    let _ = child.wait();
}

fn join_reader(reader: Option<JoinHandle<String>>) -> String {
    reader
        .and_then(|reader| reader.join().ok())
        .unwrap_or_default()
}
