pub mod args;
pub mod canonical;
pub mod compare;
pub mod config;
pub mod domain;
pub mod error;
pub mod hosts;
pub mod report;
pub mod source;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use compare::{intersection, unique_in_b, Comparison};
pub use config::Config;
pub use error::HostsError;
pub use hosts::HostList;
pub use source::Source;
pub use stats::TldTally;
