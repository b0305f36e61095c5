pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod forms;
pub mod page;
pub mod telemetry;
