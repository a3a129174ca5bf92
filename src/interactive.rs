use reqwest::Url;

use self::utils::{prompt_secret_handle_errors, prompt_text_handle_errors};
use crate::cli::PrivateKey;
use crate::config::Network;

mod utils;

/// Uses the key from the command line or environment, prompts otherwise.
pub fn resolve_private_key(
    private_key: Option<PrivateKey>,
) -> eyre::Result<PrivateKey> {
    if let Some(private_key) = private_key {
        return Ok(private_key);
    }

    prompt_secret_handle_errors("Deployer private key:")
}

pub fn resolve_rpc_url(
    rpc_url: Option<Url>,
    network: Network,
) -> eyre::Result<Url> {
    if let Some(rpc_url) = rpc_url {
        println!("Using RPC: {rpc_url}");
        return Ok(rpc_url);
    }

    prompt_text_handle_errors(&format!("RPC url for {network}:"))
}
