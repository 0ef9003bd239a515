use super::error::{ErrorAzCli, ResultAzCli};
use serde::de::DeserializeOwned;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Captured result of one external invocation.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Runs the subscription tool with the given arguments.
pub trait CommandRunner {
    fn run(&self, args: &[&str]) -> ResultAzCli<CommandOutput>;
}

/// The real Azure CLI, bounded by a timeout per invocation.
#[derive(Debug, Clone)]
pub struct AzCli {
    program: PathBuf,
    timeout: Duration,
}

impl AzCli {
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }
}

impl CommandRunner for AzCli {
    fn run(&self, args: &[&str]) -> ResultAzCli<CommandOutput> {
        debug!(program = %self.program.display(), ?args, "running external cli");
        let started = Instant::now();

        let mut child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => ErrorAzCli::AzNotInstalled,
                _ => ErrorAzCli::Io(err),
            })?;

        // Pipes are drained concurrently so a chatty child cannot fill them and stall.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let status = wait_with_timeout(&mut child, self.timeout)?;
        let stdout = join(stdout)?;
        let stderr = join(stderr)?;

        debug!(
            code = ?status.code(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "external cli finished"
        );

        Ok(CommandOutput {
            success: status.success(),
            code: status.code(),
            stdout,
            stderr,
        })
    }
}

fn drain<R>(pipe: Option<R>) -> Option<JoinHandle<io::Result<Vec<u8>>>>
where
    R: Read + Send + 'static,
{
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            pipe.read_to_end(&mut buf)?;
            Ok(buf)
        })
    })
}

fn join(handle: Option<JoinHandle<io::Result<Vec<u8>>>>) -> ResultAzCli<Vec<u8>> {
    match handle {
        Some(handle) => handle
            .join()
            .map_err(|_| ErrorAzCli::Io(io::Error::other("output reader panicked")))?
            .map_err(ErrorAzCli::Io),
        None => Ok(Vec::new()),
    }
}

fn wait_with_timeout(child: &mut Child, timeout: Duration) -> ResultAzCli<ExitStatus> {
    let deadline = Instant::now() + timeout;

    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(status);
        }

        if Instant::now() >= deadline {
            warn!(?timeout, "external cli timed out, killing it");
            // The child may exit between the poll and the kill.
            let _ = child.kill();
            let _ = child.wait();
            return Err(ErrorAzCli::Timeout(timeout));
        }

        thread::sleep(POLL_INTERVAL);
    }
}

fn az_raw(runner: &dyn CommandRunner, args: &[&str]) -> ResultAzCli<Vec<u8>> {
    let output = runner.run(args)?;

    if output.success {
        return Ok(output.stdout);
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    Err(ErrorAzCli::CommandFailure {
        code: output.code,
        stderr,
    })
}

/// Runs the tool and discards its output, failing on a non-zero exit.
pub fn az_unit(runner: &dyn CommandRunner, args: &[&str]) -> ResultAzCli<()> {
    az_raw(runner, args).map(|_| ())
}

/// Runs the tool and parses its stdout as JSON.
pub fn az<T>(runner: &dyn CommandRunner, args: &[&str]) -> ResultAzCli<T>
where
    T: DeserializeOwned,
{
    let stdout = az_raw(runner, args)?;
    Ok(serde_json::from_slice(&stdout)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(CommandOutput);

    impl CommandRunner for Canned {
        fn run(&self, _args: &[&str]) -> ResultAzCli<CommandOutput> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn missing_program_is_not_installed() {
        let cli = AzCli::new("azs-definitely-not-a-real-program", Duration::from_secs(1));

        let err = cli.run(&["account", "list"]).unwrap_err();

        assert!(matches!(err, ErrorAzCli::AzNotInstalled));
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_and_exit_code() {
        let cli = AzCli::new("sh", Duration::from_secs(5));

        let output = cli.run(&["-c", "printf hello; exit 3"]).unwrap();

        assert!(!output.success);
        assert_eq!(output.code, Some(3));
        assert_eq!(output.stdout, b"hello");
    }

    #[cfg(unix)]
    #[test]
    fn slow_program_times_out() {
        let cli = AzCli::new("sh", Duration::from_millis(200));
        let started = Instant::now();

        let err = cli.run(&["-c", "sleep 5"]).unwrap_err();

        assert!(matches!(err, ErrorAzCli::Timeout(_)));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn non_zero_exit_is_command_failure() {
        let runner = Canned(CommandOutput {
            success: false,
            code: Some(1),
            stdout: Vec::new(),
            stderr: b"  ERROR: boom \n".to_vec(),
        });

        let err = az_unit(&runner, &["account", "set"]).unwrap_err();

        match err {
            ErrorAzCli::CommandFailure { code, stderr } => {
                assert_eq!(code, Some(1));
                assert_eq!(stderr, "ERROR: boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn garbage_stdout_is_parse_error() {
        let runner = Canned(CommandOutput {
            success: true,
            code: Some(0),
            stdout: b"not json".to_vec(),
            stderr: Vec::new(),
        });

        let err = az::<Vec<String>>(&runner, &["account", "list"]).unwrap_err();

        assert!(matches!(err, ErrorAzCli::ParseError(_)));
    }
}
