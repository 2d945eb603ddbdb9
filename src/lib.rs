#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{
    processor::{InputProcessor, RunSummary},
    scanner::Scanner,
};
pub use domain::model::{TestCase, Verdict, MINUTES_PER_DAY};
pub use utils::error::{CheckError, Result};
