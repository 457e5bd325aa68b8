/*!
   Error type used for the test framework.
*/

use eyre::Report;
use flex_error::{define_error, TraceError};

define_error! {
    Error {
        Generic
            [ TraceError<Report> ]
            | _ | { "generic error" },

        Io
            [ TraceError<std::io::Error> ]
            | _ | { "I/O error" },

        CommandNotFound
            { command: String }
            [ TraceError<std::io::Error> ]
            | e | {
                format!("failed to execute command: {}", e.command)
            },

        Execution
            { command: String, status: Option<i32>, message: String }
            | e | {
                format!(
                    "command {} exited with status {:?}: {}",
                    e.command, e.status, e.message
                )
            },

        RetryTimeout
            { task_name: String, attempts: u16 }
            | e | {
                format!(
                    "expected task to eventually succeed, but failed after {} attempts: {}",
                    e.attempts, e.task_name
                )
            },

        Assertion
            { message: String }
            | e | {
                format!("assertion failure: {}", e.message)
            },
    }
}

impl From<Report> for Error {
    fn from(e: Report) -> Self {
        Error::generic(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io(e)
    }
}

pub fn handle_generic_error(e: impl Into<Report>) -> Error {
    Error::generic(e.into())
}

pub fn handle_exec_error(command: &str) -> impl FnOnce(std::io::Error) -> Error + '_ {
    |e| Error::command_not_found(command.to_string(), e)
}
