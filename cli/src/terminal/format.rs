use std::net::IpAddr;

use colored::*;
use ipbeacon_common::address::{AddressResult, FailureCode};
use ipbeacon_common::report::SubmitStatus;

use crate::terminal::colors;

pub fn failure_reason(code: FailureCode) -> &'static str {
    match code {
        FailureCode::General => "lookup failed",
        FailureCode::BadStatus => "endpoint returned non-200",
        FailureCode::Transport => "endpoint unreachable",
        FailureCode::InvalidAddress => "not an IP address",
    }
}

pub fn address(result: &AddressResult) -> ColoredString {
    match result {
        AddressResult::Valid(ip @ IpAddr::V4(_)) => ip.to_string().color(colors::IPV4_ADDR),
        AddressResult::Valid(ip @ IpAddr::V6(_)) => ip.to_string().color(colors::IPV6_ADDR),
        AddressResult::Failure(code) => {
            format!("{} ({})", code, failure_reason(*code)).color(colors::FAILURE)
        }
    }
}

pub fn addresses(results: &[AddressResult]) -> String {
    results
        .iter()
        .map(|r| address(r).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn submit_status(status: &SubmitStatus) -> ColoredString {
    match status {
        SubmitStatus::Delivered(code) if (200..300).contains(code) => code.to_string().green().bold(),
        SubmitStatus::Delivered(code) => code.to_string().yellow().bold(),
        SubmitStatus::Failed(_) => status.to_string().color(colors::FAILURE),
    }
}
