use std::time::Duration;

use axum::http::StatusCode;
use ipbeacon_common::address::{validate, AddressResult, FailureCode};
use ipbeacon_common::config::PayloadEncoding;
use ipbeacon_common::error::SubmitError;
use ipbeacon_common::report::Report;
use ipbeacon_core::http::build_client;
use ipbeacon_core::submit::Submitter;

use crate::mock::{self, fields, Webhook};

fn sample_report() -> Report {
    Report::with_time(vec![validate("8.8.8.8")], vec![validate("192.168.1.5")], "4:26pm")
}

fn submitter(url: String, encoding: PayloadEncoding) -> Submitter {
    Submitter::new(build_client(Duration::from_secs(5)).unwrap(), url, encoding)
}

#[tokio::test]
async fn form_body_has_exactly_the_three_keys() {
    let webhook = Webhook::start(StatusCode::OK).await;

    let status = submitter(webhook.form_url(), PayloadEncoding::Form)
        .submit(&sample_report())
        .await
        .unwrap();

    assert_eq!(status, 200);
    assert_eq!(
        webhook.received(),
        [fields(&[("globalip", "8.8.8.8"), ("localip", "192.168.1.5"), ("localtime", "4:26pm")])]
    );
}

#[tokio::test]
async fn json_body_has_exactly_the_three_keys() {
    let webhook = Webhook::start(StatusCode::ACCEPTED).await;

    let status = submitter(webhook.json_url(), PayloadEncoding::Json)
        .submit(&sample_report())
        .await
        .unwrap();

    assert_eq!(status, 202);
    assert_eq!(
        webhook.received(),
        [fields(&[("globalip", "8.8.8.8"), ("localip", "192.168.1.5"), ("localtime", "4:26pm")])]
    );
}

#[tokio::test]
async fn sentinels_are_submitted_as_numbers() {
    let webhook = Webhook::start(StatusCode::OK).await;
    let report = Report::with_time(
        vec![AddressResult::Failure(FailureCode::Transport)],
        vec![AddressResult::Failure(FailureCode::General)],
        "9:01am",
    );

    submitter(webhook.form_url(), PayloadEncoding::Form)
        .submit(&report)
        .await
        .unwrap();

    assert_eq!(
        webhook.received(),
        [fields(&[("globalip", "-3"), ("localip", "-1"), ("localtime", "9:01am")])]
    );
}

#[tokio::test]
async fn error_statuses_are_returned_not_raised() {
    let webhook = Webhook::start(StatusCode::INTERNAL_SERVER_ERROR).await;

    let status = submitter(webhook.form_url(), PayloadEncoding::Form)
        .submit(&sample_report())
        .await
        .unwrap();

    assert_eq!(status, 500);
}

#[tokio::test]
async fn unreachable_webhook_is_a_transport_error() {
    let url = mock::closed_url().await;

    let result = submitter(url, PayloadEncoding::Form).submit(&sample_report()).await;

    assert!(matches!(result, Err(SubmitError::Transport(_))));
}
