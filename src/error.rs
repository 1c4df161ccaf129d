//! Application-level errors

use kobe_math::MathError;
use thiserror::Error;

use crate::config::ConfigError;

/// Anything that can stop the camera demo
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("camera math failed: {0}")]
    Math(#[from] MathError),
}
