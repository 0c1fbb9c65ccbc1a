//! Domain types shared by the resolvers, the submitter and the CLI.

pub mod address;
pub mod config;
pub mod error;
pub mod report;
