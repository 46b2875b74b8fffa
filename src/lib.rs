// translate-relay - HTTP relay in front of a machine-translation provider
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod provider;
pub mod server;
pub mod translation;
pub mod utils;
