use std::time::Instant;

use tracing::{error, info};

use ipbeacon_common::config::Config;
use ipbeacon_common::report::{Report, RunSummary, SubmitStatus};

use crate::global::GlobalResolver;
use crate::http::build_client;
use crate::local::{FallbackSource, LocalResolver};
use crate::submit::Submitter;

/// Resolves both addresses, posts them, and times the whole thing.
pub struct Runner {
    global: GlobalResolver,
    local: LocalResolver,
    submitter: Submitter,
}

impl Runner {
    pub fn new(global: GlobalResolver, local: LocalResolver, submitter: Submitter) -> Self {
        Self {
            global,
            local,
            submitter,
        }
    }

    /// Wires the default adapters: one shared HTTP client and the native-then-ifconfig lookup.
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let client = build_client(cfg.timeout)?;

        let global = GlobalResolver::new(client.clone(), cfg.ip_url.clone());
        let local = LocalResolver::for_host(Box::new(FallbackSource::default()))
            .with_interface(cfg.interface.clone());
        let submitter = Submitter::new(client, cfg.post_url.clone(), cfg.encoding);

        Ok(Self::new(global, local, submitter))
    }

    /// Runs every step exactly once, in order. Never fails: a webhook that
    /// cannot be reached shows up as [`SubmitStatus::Failed`].
    pub async fn run(&self) -> RunSummary {
        let start = Instant::now();

        info!("Asking {} for the public address", self.global.url());
        let global = self.global.resolve().await;

        info!("Reading the local interface address");
        let local = self.local.resolve();

        let report = Report::new(global, local);

        info!("Posting report to {}", self.submitter.url());
        let submit_status = match self.submitter.submit(&report).await {
            Ok(status) => SubmitStatus::Delivered(status),
            Err(e) => {
                error!("{e}");
                SubmitStatus::Failed(e.to_string())
            }
        };

        RunSummary {
            report,
            submit_status,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        }
    }
}
