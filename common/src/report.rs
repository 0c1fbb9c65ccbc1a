use std::fmt;
use std::mem::size_of;

use chrono::{Local, NaiveTime};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::address::{AddressResult, FailureCode};

/// Everything gathered during a run, frozen once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    global_addresses: Vec<AddressResult>,
    local_addresses: Vec<AddressResult>,
    local_time: String,
}

impl Report {
    /// Builds a report stamped with the current local time.
    pub fn new(global_addresses: Vec<AddressResult>, local_addresses: Vec<AddressResult>) -> Self {
        Self::with_time(global_addresses, local_addresses, local_clock())
    }

    pub fn with_time(
        global_addresses: Vec<AddressResult>,
        local_addresses: Vec<AddressResult>,
        local_time: impl Into<String>,
    ) -> Self {
        Self {
            global_addresses,
            local_addresses,
            local_time: local_time.into(),
        }
    }

    pub fn global_addresses(&self) -> &[AddressResult] {
        &self.global_addresses
    }

    pub fn local_addresses(&self) -> &[AddressResult] {
        &self.local_addresses
    }

    pub fn local_time(&self) -> &str {
        &self.local_time
    }
}

/// `4:26pm` style: 12-hour clock, no leading zero on the hour.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%-I:%M%P").to_string()
}

pub fn local_clock() -> String {
    format_clock(Local::now().time())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    /// The webhook answered; the raw HTTP status is kept uninterpreted.
    Delivered(u16),
    /// The webhook could not be reached.
    Failed(String),
}

impl SubmitStatus {
    /// HTTP status, or the transport sentinel when nothing came back.
    pub fn status_code(&self) -> i32 {
        match self {
            SubmitStatus::Delivered(status) => i32::from(*status),
            SubmitStatus::Failed(_) => FailureCode::Transport.code(),
        }
    }
}

impl fmt::Display for SubmitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitStatus::Delivered(status) => write!(f, "{status}"),
            SubmitStatus::Failed(reason) => write!(f, "{} ({reason})", self.status_code()),
        }
    }
}

/// The single artifact a run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub report: Report,
    pub submit_status: SubmitStatus,
    pub elapsed_seconds: f64,
}

// `submit_status_code` is always present, next to the tagged status.
impl Serialize for RunSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RunSummary", 4)?;
        state.serialize_field("report", &self.report)?;
        state.serialize_field("submit_status", &self.submit_status)?;
        state.serialize_field("submit_status_code", &self.submit_status.status_code())?;
        state.serialize_field("elapsed_seconds", &self.elapsed_seconds)?;
        state.end()
    }
}

impl RunSummary {
    /// Best-effort footprint: the struct itself plus the heap buffers it owns.
    pub fn approx_size(&self) -> usize {
        let report = &self.report;
        let reason = match &self.submit_status {
            SubmitStatus::Failed(reason) => reason.capacity(),
            SubmitStatus::Delivered(_) => 0,
        };

        size_of::<Self>()
            + (report.global_addresses.capacity() + report.local_addresses.capacity())
                * size_of::<AddressResult>()
            + report.local_time.capacity()
            + reason
    }
}
