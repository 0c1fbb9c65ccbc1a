use std::time::Duration;

use axum::http::StatusCode;
use ipbeacon_common::config::PayloadEncoding;
use ipbeacon_common::report::SubmitStatus;
use ipbeacon_core::global::GlobalResolver;
use ipbeacon_core::http::build_client;
use ipbeacon_core::local::LocalResolver;
use ipbeacon_core::runner::Runner;
use ipbeacon_core::submit::Submitter;

use crate::mock::{self, IfconfigOutput, Webhook};

const ETH0: &str = "eth0: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500
        inet 192.168.1.5  netmask 255.255.255.0  broadcast 192.168.1.255";

fn runner(ip_url: String, post_url: String, ifconfig: &'static str) -> Runner {
    let client = build_client(Duration::from_secs(5)).unwrap();
    Runner::new(
        GlobalResolver::new(client.clone(), ip_url),
        LocalResolver::new(Box::new(IfconfigOutput(ifconfig)), "linux"),
        Submitter::new(client, post_url, PayloadEncoding::Form),
    )
}

fn rendered(results: &[ipbeacon_common::address::AddressResult]) -> Vec<String> {
    results.iter().map(ToString::to_string).collect()
}

#[tokio::test]
async fn full_run_reports_both_addresses() {
    let ip_url = mock::ip_endpoint(StatusCode::OK, r#"{"ip":"8.8.8.8"}"#).await;
    let webhook = Webhook::start(StatusCode::NO_CONTENT).await;

    let summary = runner(ip_url, webhook.form_url(), ETH0).run().await;

    assert_eq!(summary.submit_status, SubmitStatus::Delivered(204));
    assert_eq!(summary.submit_status.status_code(), 204);
    assert_eq!(rendered(summary.report.global_addresses()), ["8.8.8.8"]);
    assert_eq!(rendered(summary.report.local_addresses()), ["192.168.1.5"]);
    assert!(summary.elapsed_seconds >= 0.0);

    let received = webhook.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["globalip"], "8.8.8.8");
    assert_eq!(received[0]["localip"], "192.168.1.5");
    assert_eq!(received[0]["localtime"], summary.report.local_time());
    assert_eq!(received[0].len(), 3);
}

#[tokio::test]
async fn resolver_failures_are_still_submitted() {
    let ip_url = mock::ip_endpoint(StatusCode::SERVICE_UNAVAILABLE, "down").await;
    let webhook = Webhook::start(StatusCode::OK).await;

    let summary = runner(ip_url, webhook.form_url(), "lo: flags=73<UP,LOOPBACK,RUNNING>").run().await;

    assert_eq!(rendered(summary.report.global_addresses()), ["-2"]);
    assert_eq!(rendered(summary.report.local_addresses()), ["-9"]);
    assert_eq!(summary.submit_status, SubmitStatus::Delivered(200));

    let received = webhook.received();
    assert_eq!(received[0]["globalip"], "-2");
    assert_eq!(received[0]["localip"], "-9");
}

#[tokio::test]
async fn unreachable_webhook_degrades_to_failed_status() {
    let ip_url = mock::ip_endpoint(StatusCode::OK, r#"{"ip":"8.8.8.8"}"#).await;
    let post_url = mock::closed_url().await;

    let summary = runner(ip_url, post_url, ETH0).run().await;

    assert!(matches!(summary.submit_status, SubmitStatus::Failed(_)));
    assert_eq!(summary.submit_status.status_code(), -3);
    assert_eq!(rendered(summary.report.global_addresses()), ["8.8.8.8"]);
}
