/*!
   Run-scoped registry of spawned long-running processes.
*/

use tracing::{info, warn};

use crate::types::process::ChildProcess;

/**
   Keeps every long-running process spawned during a harness run, in
   registration order, and tears all of them down at the end of the run.

   Teardown is best-effort: a process that fails to terminate is logged
   and skipped so that the remaining processes are still taken down. The
   registry is expected to be owned by the single control thread of the
   run; it is drained and left empty by [`shutdown_all`](Self::shutdown_all).

   Dropping a non-empty registry also terminates every remaining process,
   so an early return from a failed bootstrap cannot leak daemons.
*/
#[derive(Default)]
pub struct ProcessRegistry {
    processes: Vec<ChildProcess>,
}

impl ProcessRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, process: ChildProcess) {
        info!("registered long-running process: {}", process.description());
        self.processes.push(process);
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /**
       Terminate every registered process, most recently started first.
    */
    pub fn shutdown_all(&mut self) {
        while let Some(mut process) = self.processes.pop() {
            if let Err(e) = process.kill() {
                warn!(
                    "failed to terminate process {}: {}",
                    process.description(),
                    e
                );
            }
        }
    }
}

impl Drop for ProcessRegistry {
    fn drop(&mut self) {
        self.shutdown_all();
    }
}

#[cfg(test)]
mod tests {
    use std::process::{Command, Stdio};

    use super::*;

    fn spawn_sleeper(tag: &str) -> ChildProcess {
        let child = Command::new("sleep")
            .arg("1000")
            .stdin(Stdio::null())
            .spawn()
            .unwrap();

        ChildProcess::new(tag, child)
    }

    #[test]
    fn shutdown_drains_the_registry() {
        let mut registry = ProcessRegistry::new();
        registry.register(spawn_sleeper("first"));
        registry.register(spawn_sleeper("second"));
        assert_eq!(registry.len(), 2);

        registry.shutdown_all();
        assert!(registry.is_empty());
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut registry = ProcessRegistry::new();
        registry.register(spawn_sleeper("only"));

        registry.shutdown_all();
        registry.shutdown_all();
        assert!(registry.is_empty());
    }
}
