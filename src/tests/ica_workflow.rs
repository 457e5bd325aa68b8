/*!
   End-to-end test of the interchain-account workflow across two live
   chains connected by the relayer.

   Requires the controller chain, host chain, and relayer binaries on
   `$PATH` with pre-initialized home directories, and the proposal files
   in the working directory. See the crate README for the environment
   variables controlling the run.
*/

use crate::prelude::*;

#[test]
fn test_interchain_account_workflow() -> Result<(), Error> {
    let config = init_test()?;

    run_interchain_workflow(&config)
}
