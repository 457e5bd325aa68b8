/*!
   Owned handle to a long-running child process.
*/

use std::process::Child;

use tracing::debug;

use crate::error::Error;

/**
   A wrapper around [`std::process::Child`] that remembers the command
   line it was spawned from and ensures the process is killed when the
   handle is dropped.

   The handle owns the child exclusively for the whole harness run, so a
   process can never be registered or terminated twice.
*/
pub struct ChildProcess {
    description: String,
    child: Child,
    waited: bool,
}

impl ChildProcess {
    pub fn new(description: &str, child: Child) -> Self {
        Self {
            description: description.to_string(),
            child,
            waited: false,
        }
    }

    /// The command line the process was spawned from.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn wait(&mut self) -> Result<(), Error> {
        if !self.waited {
            self.waited = true;
            self.child.wait()?;
        }

        Ok(())
    }

    /**
       Terminate the process and reap it. Dropping the reaped handle also
       closes the output pipes held by the child.
    */
    pub fn kill(&mut self) -> Result<(), Error> {
        debug!("terminating child process: {}", self.description);

        self.child.kill()?;
        self.wait()?;

        Ok(())
    }
}

impl Drop for ChildProcess {
    fn drop(&mut self) {
        if !self.waited {
            let _ = self.kill();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::process::{Command, Stdio};

    use super::*;

    fn spawn_sleeper() -> ChildProcess {
        let child = Command::new("sleep")
            .arg("1000")
            .stdin(Stdio::null())
            .spawn()
            .unwrap();

        ChildProcess::new("sleep 1000", child)
    }

    #[test]
    fn kill_reaps_the_child() {
        let mut process = spawn_sleeper();
        process.kill().unwrap();

        // A second kill is a no-op on the already-reaped handle.
        assert!(process.wait().is_ok());
    }

    #[test]
    fn drop_terminates_the_child() {
        let process = spawn_sleeper();
        drop(process);
    }
}
