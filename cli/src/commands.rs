pub mod run;

use std::time::Duration;

use clap::Parser;
use ipbeacon_common::config::{
    Config, DEFAULT_IP_URL, DEFAULT_POST_URL, DEFAULT_TIMEOUT, PayloadEncoding,
};

#[derive(Parser)]
#[command(name = "ipbeacon")]
#[command(about = "Reports this host's public and local IPv4 address to a webhook.")]
pub struct CommandLine {
    /// Endpoint answering with {"ip": "..."}
    #[arg(long, default_value = DEFAULT_IP_URL)]
    pub ip_url: String,

    /// Webhook receiving the report
    #[arg(long, default_value = DEFAULT_POST_URL)]
    pub post_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs(), value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Webhook body encoding (form or json)
    #[arg(long, default_value_t = PayloadEncoding::Form)]
    pub encoding: PayloadEncoding,

    /// Interface to read the local address from, instead of en0/eth0
    #[arg(long)]
    pub interface: Option<String>,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Only print warnings, errors and the summary
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            ip_url: self.ip_url.clone(),
            post_url: self.post_url.clone(),
            timeout: Duration::from_secs(self.timeout),
            encoding: self.encoding,
            interface: self.interface.clone(),
        }
    }
}
