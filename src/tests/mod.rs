/*!
   The live end-to-end scenario. Compiled only with the `e2e` feature,
   since it requires the chain and relayer binaries to be installed.
*/

pub mod ica_workflow;
