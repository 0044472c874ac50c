pub mod analyzers;
pub mod config;
pub mod error;
pub mod fetch;
pub mod http;
pub mod infra;
pub mod logging;
pub mod output;
pub mod season;
pub mod services;

pub use error::{Error, Result};
