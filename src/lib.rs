pub mod config;
pub mod enquiry;
pub mod error;
pub mod telemetry;
