pub mod fetcher_config;

pub use fetcher_config::FetcherConfig;
