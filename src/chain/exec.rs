/*!
   Execution of one-shot external commands.
*/

use std::io::Write;
use std::process::{Command, Output, Stdio};
use std::str;

use tracing::{debug, trace};

use crate::error::{handle_exec_error, handle_generic_error, Error};

#[derive(Debug)]
pub struct ExecOutput {
    pub stdout: String,
    pub stderr: String,
}

/**
   Run a command to completion and capture its output.

   Returns an [`Error::execution`] if the command exits with a non-zero
   status. The child is fully reaped on both the success and the failure
   path, so no process handle outlives the call.
*/
pub fn simple_exec(desc: &str, command_path: &str, args: &[&str]) -> Result<ExecOutput, Error> {
    debug!(
        "executing command for {}: {} {}",
        desc,
        command_path,
        itertools::join(args, " ")
    );

    let output = Command::new(command_path)
        .args(args)
        .output()
        .map_err(handle_exec_error(command_path))?;

    collect_output(command_path, output)
}

/**
   Same as [`simple_exec`], but the given input is written to the child's
   standard input first. The input stream is closed before any output is
   read, so that commands which read stdin to EOF cannot deadlock against
   the harness.
*/
pub fn exec_with_input(
    desc: &str,
    command_path: &str,
    args: &[&str],
    input: &str,
) -> Result<ExecOutput, Error> {
    debug!(
        "executing command for {} with input: {} {}",
        desc,
        command_path,
        itertools::join(args, " ")
    );

    let mut child = Command::new(command_path)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(handle_exec_error(command_path))?;

    {
        // Taking the handle out of the child means the pipe is closed
        // at the end of this block, before the output is collected.
        let mut stdin = child.stdin.take().ok_or_else(|| {
            Error::execution(
                command_path.to_string(),
                None,
                "no stdin handle on spawned child".to_string(),
            )
        })?;

        stdin.write_all(input.as_bytes())?;
    }

    let output = child
        .wait_with_output()
        .map_err(handle_exec_error(command_path))?;

    collect_output(command_path, output)
}

fn collect_output(command_path: &str, output: Output) -> Result<ExecOutput, Error> {
    if output.status.success() {
        let stdout = str::from_utf8(&output.stdout)
            .map_err(handle_generic_error)?
            .to_string();

        let stderr = str::from_utf8(&output.stderr)
            .map_err(handle_generic_error)?
            .to_string();

        trace!(
            "command executed successfully with stdout: {}, stderr: {}",
            stdout,
            stderr
        );

        Ok(ExecOutput { stdout, stderr })
    } else {
        let message = str::from_utf8(&output.stderr)
            .map_err(handle_generic_error)?
            .to_string();

        Err(Error::execution(
            command_path.to_string(),
            output.status.code(),
            message,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorDetail;

    #[test]
    fn captures_stdout_of_successful_command() {
        let output = simple_exec("test", "echo", &["hello"]).unwrap();
        assert_eq!(output.stdout, "hello\n");
    }

    #[test]
    fn input_is_fed_and_stream_closed() {
        let output = exec_with_input("test", "cat", &[], "piped input").unwrap();
        assert_eq!(output.stdout, "piped input");
    }

    #[test]
    fn non_zero_exit_is_an_execution_error() {
        let err = simple_exec("test", "false", &[]).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::Execution(_)));
    }

    #[test]
    fn missing_binary_is_reported_as_such() {
        let err = simple_exec("test", "no-such-binary-ever", &[]).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::CommandNotFound(_)));
    }
}
