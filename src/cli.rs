use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use eyre::WrapErr;

pub mod private_key;

pub use private_key::PrivateKey;
use reqwest::Url;

use crate::config::{Config, Network};

#[derive(Debug, Clone, Parser)]
#[clap(rename_all = "kebab-case")]
pub struct Args {
    /// Path to the deployment configuration file
    ///
    /// Every setting has a default, so this is optional
    #[clap(short, long, env)]
    pub config: Option<PathBuf>,

    /// Private key to use for the deployment
    #[clap(short, long, env)]
    pub private_key: Option<PrivateKey>,

    /// The RPC Url to use for the deployment
    #[clap(short, long, env)]
    pub rpc_url: Option<Url>,

    /// Network to deploy to, overrides the config file
    #[clap(short, long, env)]
    pub network: Option<Network>,

    /// Where to write the deployment record, overrides the config file
    #[clap(short, long, env = "DEPLOYMENT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// The etherscan API key to use for source verification
    #[clap(short, long, env)]
    pub etherscan_api_key: Option<String>,

    /// Run `forge build` in the contracts root before deploying
    #[clap(long)]
    pub build: bool,
}

impl Args {
    /// Parses the command line, a bad flag or value is an error instead of
    /// clap's own usage exit. `--help` still prints and exits.
    pub fn parse_args<I, T>(args: I) -> eyre::Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(args) => Ok(args),
            Err(err)
                if matches!(
                    err.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
                ) =>
            {
                err.exit()
            }
            Err(err) => Err(err).wrap_err("Invalid arguments"),
        }
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(network) = self.network {
            config.network = network;
        }

        if let Some(output) = self.output.as_ref() {
            config.report_path = output.clone();
        }
    }
}
