/*!
   Functions for initializing the harness at the beginning of a run.
*/

use core::time::Duration;
use std::env;
use std::fs;
use std::sync::Once;

use tracing_subscriber::{
    self as ts,
    filter::{EnvFilter, LevelFilter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::Error;
use crate::types::config::TestConfig;
use crate::util::random::random_u32;
use crate::util::retry::RetryPolicy;

static INIT: Once = Once::new();

/// Deterministic address of the first contract instantiated on a fresh
/// wasmd chain, which the scenario's ownership transfer targets.
const DEFAULT_CONTRACT_ADDRESS: &str =
    "wasm14hj2tavq8fpesdwxxcu44rty3hh90vhujrvcmstl4zr3txmfvw9s0phg4d";

/**
   Initialize the harness with a global logger and error handlers, read
   the environment variables and return a [`TestConfig`].

   A fresh randomized run directory is created under `CHAIN_STORE_DIR`
   to receive the log files of the spawned processes.
*/
pub fn init_test() -> Result<TestConfig, Error> {
    let no_color_log = env::var("NO_COLOR_LOG")
        .ok()
        .map(|val| val == "1")
        .unwrap_or(false);

    INIT.call_once(|| {
        if !no_color_log {
            let _ = color_eyre::install();
        }
        install_logger(!no_color_log);
    });

    let chain_command_paths =
        parse_list(&env::var("CHAIN_COMMAND_PATHS").unwrap_or_else(|_| "marsd,wasmd".to_string()));

    let chain_ids =
        parse_list(&env::var("CHAIN_IDS").unwrap_or_else(|_| "mars-dev-1,wasm-dev-1".to_string()));

    let relayer_command_path =
        env::var("RELAYER_COMMAND_PATH").unwrap_or_else(|_| "hermes".to_string());

    let base_store_dir = env::var("CHAIN_STORE_DIR").unwrap_or_else(|_| "data".to_string());

    let chain_store_dir = format!("{}/run-{:x}", base_store_dir, random_u32());

    fs::create_dir_all(&chain_store_dir)?;

    let chain_store_dir = fs::canonicalize(chain_store_dir)?;

    let hang_on_fail = env::var("HANG_ON_FAIL")
        .ok()
        .map(|val| val == "1")
        .unwrap_or(false);

    Ok(TestConfig {
        chain_a_command_path: item_or(&chain_command_paths, 0, "marsd"),
        chain_b_command_path: item_or(&chain_command_paths, 1, "wasmd"),
        chain_a_id: item_or(&chain_ids, 0, "mars-dev-1"),
        chain_b_id: item_or(&chain_ids, 1, "wasm-dev-1"),
        relayer_command_path,
        chain_store_dir,
        connection_id: "connection-0".to_string(),
        channel_id: "channel-0".to_string(),
        transfer_port: "transfer".to_string(),
        validator_wallet: env::var("VALIDATOR_WALLET").unwrap_or_else(|_| "test1".to_string()),
        user_wallet: env::var("USER_WALLET").unwrap_or_else(|_| "test3".to_string()),
        contract_address: env::var("CONTRACT_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_CONTRACT_ADDRESS.to_string()),
        funds_proposal_path: env::var("FUNDS_PROPOSAL")
            .unwrap_or_else(|_| "send_funds.json".to_string())
            .into(),
        messages_proposal_path: env::var("MESSAGES_PROPOSAL")
            .unwrap_or_else(|_| "send_messages.json".to_string())
            .into(),
        retry_policy: RetryPolicy::new(
            50,
            Duration::from_secs(2),
            Duration::from_secs(90),
            1,
        ),
        hang_on_fail,
    })
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|item| item.trim().to_string()).collect()
}

fn item_or(items: &[String], index: usize, default: &str) -> String {
    items
        .get(index)
        .filter(|item| !item.is_empty())
        .cloned()
        .unwrap_or_else(|| default.to_string())
}

/**
   Install the [`tracing_subscriber`] logger handlers so that logs will
   be displayed during the run.
*/
pub fn install_logger(with_color: bool) {
    // Use log level INFO by default if RUST_LOG is not set.
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let layer = ts::fmt::layer().with_ansi(with_color);

    ts::registry().with(env_filter).with(layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_command_lists() {
        let items = parse_list("marsd, wasmd");
        assert_eq!(items, vec!["marsd".to_string(), "wasmd".to_string()]);
    }

    #[test]
    fn falls_back_on_missing_items() {
        let items = parse_list("marsd");
        assert_eq!(item_or(&items, 0, "other"), "marsd");
        assert_eq!(item_or(&items, 1, "wasmd"), "wasmd");
    }
}
