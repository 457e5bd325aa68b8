#![doc = include_str!("../README.md")]

//!
//! ## Overview
//!
//! The framework is organized in layers, with command execution at the
//! bottom and the scenario orchestration at the top:
//!
//! - [`chain::exec`] runs one-shot commands to completion and captures
//!   their output, failing on a non-zero exit status.
//!
//! - [`types::process`] and [`types::registry`] own the long-running
//!   chain daemons and the relayer, and guarantee that every spawned
//!   process is terminated when the harness run ends, on success and
//!   failure alike.
//!
//! - [`util::retry`] provides the bounded polling combinator used for
//!   every expectation that depends on asynchronous chain or relayer
//!   progress, such as block production, governance voting, and packet
//!   relaying.
//!
//! - [`chain::driver::ChainDriver`] and [`relayer::driver::RelayerDriver`]
//!   are per-process facades over the external command-line interfaces.
//!
//! - [`workflow`] sequences the scenario phases: bootstrap, interchain
//!   account registration, governance-gated funding, and a
//!   governance-gated remote contract call.
//!
//! The live scenario test lives in [`tests`] and is compiled only with
//! the `e2e` feature, since it requires the external chain and relayer
//! binaries.

pub mod bootstrap;
pub mod chain;
pub mod error;
pub mod prelude;
pub mod relayer;
pub mod types;
pub mod util;
pub mod workflow;

#[cfg(any(doc, feature = "e2e"))]
pub mod tests;
