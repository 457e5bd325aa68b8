/*!
   Initialization of a harness run and bootstrapping of the deployment
   under test.
*/

pub mod deployment;
pub mod init;
