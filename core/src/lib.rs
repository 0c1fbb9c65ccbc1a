//! Address acquisition and report submission.
//!
//! * [`global`]: public address(es) from a remote JSON endpoint.
//! * [`local`]: address of the host's primary interface.
//! * [`submit`]: posts the collected [`Report`](ipbeacon_common::report::Report) to a webhook.
//! * [`runner`]: runs the three steps in order and produces a `RunSummary`.

pub mod global;
pub mod http;
pub mod local;
pub mod runner;
pub mod submit;
