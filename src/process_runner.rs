use crate::test_case::Invocation;
use crate::test_result::ExecutionResult;
use std::io::{self, Read};
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

/// Interpreter used for [`Invocation::Shell`]
pub const SHELL: &str = "sh";

/// The child could not be run to completion, as opposed to running and
/// printing something unexpected
#[derive(Debug, Error)]
pub enum RunError {
    #[error("empty command line")]
    EmptyCommand,
    #[error("failed to start process: {0}")]
    FailedToSpawn(#[source] io::Error),
    #[error("failed to capture process output: {0}")]
    FailedToCapture(#[source] io::Error),
}

/// Run `invocation` to completion and capture stdout and stderr as one stream
///
/// Blocks until the child exits. There is no timeout. A non-zero exit code is
/// recorded but is not an error.
pub fn run(invocation: &Invocation) -> ExecutionResult {
    match capture_combined_output(invocation) {
        Ok((combined_output, exit_status)) => ExecutionResult {
            combined_output,
            exit_code: exit_status.code(),
            exit_error: None,
        },
        Err(err) => ExecutionResult {
            combined_output: String::new(),
            exit_code: None,
            exit_error: Some(err),
        },
    }
}

fn capture_combined_output(invocation: &Invocation) -> Result<(String, ExitStatus), RunError> {
    let mut cmd = build_command(invocation)?;

    // Both streams share one pipe so the OS decides the interleaving
    let (mut reader, writer) = io::pipe().map_err(RunError::FailedToCapture)?;
    let stdout_writer = writer.try_clone().map_err(RunError::FailedToCapture)?;
    cmd.stdin(Stdio::null());
    cmd.stdout(stdout_writer);
    cmd.stderr(writer);

    let mut child = cmd.spawn().map_err(RunError::FailedToSpawn)?;

    // `cmd` still owns the parent's write ends; the read below only sees EOF once they are closed
    drop(cmd);

    let mut buf: Vec<u8> = vec![];
    let read_result = reader.read_to_end(&mut buf);
    let exit_status = child.wait().map_err(RunError::FailedToCapture)?;
    read_result.map_err(RunError::FailedToCapture)?;

    Ok((String::from_utf8_lossy(&buf).into_owned(), exit_status))
}

fn build_command(invocation: &Invocation) -> Result<Command, RunError> {
    match invocation {
        Invocation::Direct { program, arguments } => {
            if program.as_os_str().is_empty() {
                return Err(RunError::EmptyCommand);
            }

            let mut cmd = Command::new(program);
            cmd.args(arguments);
            Ok(cmd)
        }
        Invocation::Shell { script, env } => {
            if script.trim().is_empty() {
                return Err(RunError::EmptyCommand);
            }

            let mut cmd = Command::new(SHELL);
            cmd.arg("-c").arg(script);
            cmd.envs(env.iter().map(|(key, value)| (key, value)));
            Ok(cmd)
        }
    }
}
