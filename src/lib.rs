pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpJsonSource;
pub use config::FetcherConfig;
pub use core::fetcher::ModelService;
pub use domain::{model::Resource, ports::JsonSource};
pub use utils::error::{FetchError, Result};
