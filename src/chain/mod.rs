/*!
   Modules for executing commands against the external chain binaries.
*/

pub mod cli;
pub mod driver;
pub mod exec;
