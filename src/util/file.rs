/*!
   Filesystem utilities.
*/

use std::fs;
use std::io;
use std::path::Path;
use std::thread;

use crate::error::Error;

/**
   Pipe a streaming source implementing [`std::io::Read`] to a file in
   append mode.

   This is used to pipe the output streams of the spawned chain daemons
   and the relayer to log files under the run directory.
*/
pub fn pipe_to_file(
    mut source: impl io::Read + Send + 'static,
    file_path: impl AsRef<Path>,
) -> Result<(), Error> {
    let mut file = fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(file_path)?;

    thread::spawn(move || {
        let _ = std::io::copy(&mut source, &mut file);
    });

    Ok(())
}
