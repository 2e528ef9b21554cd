pub mod config;
pub mod error;
pub mod feed;
pub mod telemetry;
pub mod violations;
