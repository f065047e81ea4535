// Domain layer: the fixed resources and the port the fetcher talks through.

pub mod model;
pub mod ports;
