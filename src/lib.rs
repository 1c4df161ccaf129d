//! Kobe - camera and transform demo built on `kobe_math`
//!
//! The library half holds the configuration layer and a first-person camera
//! so both the binary and the integration tests can reach them.

pub mod camera;
pub mod config;
pub mod error;

pub use camera::Camera;
pub use config::{AppConfig, ConfigError};
pub use error::AppError;
