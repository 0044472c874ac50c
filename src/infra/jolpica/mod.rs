//! Client for the Jolpica mirror of the Ergast F1 API.

mod client;
mod wire;

pub use client::{DEFAULT_BASE_URL, JolpicaClient, MAX_PAGE_SIZE};
