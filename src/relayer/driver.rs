/*!
   Implementation of [`RelayerDriver`].
*/

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::chain::exec::simple_exec;
use crate::error::{handle_exec_error, Error};
use crate::types::process::ChildProcess;
use crate::util::file::pipe_to_file;

/**
   A driver for the external relayer binary, covering the two commands
   the harness needs: one-shot channel creation and the long-running
   relay loop.
*/
#[derive(Debug, Clone)]
pub struct RelayerDriver {
    /// The filesystem path to the relayer CLI.
    pub command_path: String,

    /// Directory receiving the relayer's log file.
    pub store_dir: PathBuf,
}

impl RelayerDriver {
    pub fn new(command_path: &str, store_dir: PathBuf) -> Self {
        Self {
            command_path: command_path.to_string(),
            store_dir,
        }
    }

    /**
       Create a transfer channel between the two chains, together with
       the underlying client and connection pair.

       This runs synchronously to completion and is never retried; a
       failure to establish the channel is fatal to the run.
    */
    pub fn create_channel(
        &self,
        chain_a_id: &str,
        a_port: &str,
        chain_b_id: &str,
        b_port: &str,
    ) -> Result<(), Error> {
        simple_exec(
            "relayer",
            &self.command_path,
            &[
                "create",
                "channel",
                &format!("--a-chain={chain_a_id}"),
                &format!("--a-port={a_port}"),
                &format!("--b-chain={chain_b_id}"),
                &format!("--b-port={b_port}"),
                "--new-client-connection",
                "--yes",
            ],
        )?;

        Ok(())
    }

    /**
       Start the relay loop in the background, piping its output to
       `relayer.log` under the store directory.
    */
    pub fn start(&self) -> Result<ChildProcess, Error> {
        let mut child = Command::new(&self.command_path)
            .arg("start")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(handle_exec_error(&self.command_path))?;

        let log_path = self.store_dir.join("relayer.log");

        if let Some(stdout) = child.stdout.take() {
            pipe_to_file(stdout, &log_path)?;
        }

        if let Some(stderr) = child.stderr.take() {
            pipe_to_file(stderr, &log_path)?;
        }

        Ok(ChildProcess::new(
            &format!("{} start", self.command_path),
            child,
        ))
    }
}
