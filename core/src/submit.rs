use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use ipbeacon_common::address::join_results;
use ipbeacon_common::config::PayloadEncoding;
use ipbeacon_common::error::SubmitError;
use ipbeacon_common::report::Report;

/// Body posted to the webhook. Exactly these three keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payload {
    pub globalip: String,
    pub localip: String,
    pub localtime: String,
}

impl From<&Report> for Payload {
    fn from(report: &Report) -> Self {
        Self {
            globalip: join_results(report.global_addresses(), ","),
            localip: join_results(report.local_addresses(), ","),
            localtime: report.local_time().to_string(),
        }
    }
}

pub struct Submitter {
    client: Client,
    url: String,
    encoding: PayloadEncoding,
}

impl Submitter {
    pub fn new(client: Client, url: impl Into<String>, encoding: PayloadEncoding) -> Self {
        Self {
            client,
            url: url.into(),
            encoding,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Posts the report and hands back whatever status the webhook answered with.
    pub async fn submit(&self, report: &Report) -> Result<u16, SubmitError> {
        let payload = Payload::from(report);
        debug!("POST {} as {}: {payload:?}", self.url, self.encoding);

        let request = self.client.post(&self.url);
        let request = match self.encoding {
            PayloadEncoding::Form => request.form(&payload),
            PayloadEncoding::Json => request.json(&payload),
        };

        let response = request.send().await?;
        Ok(response.status().as_u16())
    }
}
