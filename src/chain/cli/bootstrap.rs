/*!
   Commands for starting a chain daemon and probing block production.
*/

use std::path::Path;
use std::process::{Command, Stdio};

use crate::chain::exec::simple_exec;
use crate::error::{handle_exec_error, Error};
use crate::types::process::ChildProcess;
use crate::util::file::pipe_to_file;

/**
   Start a full node in the background with `<command> start`, piping
   its output streams to `<chain_id>.log` under the store directory.

   Returns a [`ChildProcess`] owning the daemon; the caller is expected
   to hand it to the process registry.
*/
pub fn start_chain(
    chain_id: &str,
    command_path: &str,
    store_dir: &Path,
) -> Result<ChildProcess, Error> {
    let mut child = Command::new(command_path)
        .arg("start")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(handle_exec_error(command_path))?;

    let log_path = store_dir.join(format!("{chain_id}.log"));

    if let Some(stdout) = child.stdout.take() {
        pipe_to_file(stdout, &log_path)?;
    }

    if let Some(stderr) = child.stderr.take() {
        pipe_to_file(stderr, &log_path)?;
    }

    Ok(ChildProcess::new(&format!("{command_path} start"), child))
}

/**
   Query the block at the given height. The query fails until the chain
   has produced that many blocks, which makes it a usable liveness
   probe when wrapped in a retry.
*/
pub fn query_block(chain_id: &str, command_path: &str, height: u64) -> Result<(), Error> {
    simple_exec(chain_id, command_path, &["q", "block", &height.to_string()])?;

    Ok(())
}
