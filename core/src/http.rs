use std::time::Duration;

use reqwest::Client;

const USER_AGENT: &str = concat!("ipbeacon/", env!("CARGO_PKG_VERSION"));

/// One client per run, shared by the global resolver and the submitter.
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}
