pub mod season_api;

pub use season_api::SeasonApi;
