pub mod config;
pub mod error;
pub mod types;

pub use config::ArmamentConfig;
pub use error::{ArmamentError, Result};
