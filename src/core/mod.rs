pub mod pow2;

pub use crate::utils::error::Result;
pub use pow2::{ceil_log2, next_power_of_two, run};
