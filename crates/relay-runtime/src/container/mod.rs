//! # Service Container
//!
//! Runtime configuration and the container that wires both engines to
//! their adapters.

pub mod config;
pub mod services;

pub use config::{ConfigError, RuntimeConfig};
pub use services::{ContainerError, RelayContainer};
