//! litmap Core — error taxonomy and configuration.

pub mod config;
pub mod error;

pub use config::LitmapConfig;
pub use error::{Error, Result};
