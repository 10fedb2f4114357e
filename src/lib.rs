#![warn(rust_2018_idioms)]

pub mod app;
pub mod backend;
pub mod config;
pub mod domain;
pub mod error;
pub mod gate;
pub mod handler;
pub mod healthcheck;
pub mod port;
pub mod service;

#[cfg(test)]
mod test_support;

pub use domain::Severity;
pub use error::{LevelCtlError, LevelError};
pub use gate::SeverityGate;
pub use healthcheck::{healthcheck, healthcheck_with_port};
pub use service::LevelControlService;
