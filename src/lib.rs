pub mod config;
pub mod core;
pub mod utils;

pub use config::CliConfig;
pub use core::pow2::{ceil_log2, next_power_of_two};
pub use utils::error::{Pow2Error, Result};
