use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_size, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "next-pow2")]
#[command(about = "Calculate the next power of two for a given image size")]
pub struct CliConfig {
    /// the size of the image
    #[arg(value_name = "size", allow_negative_numbers = true)]
    pub size: i64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // 負數與零留到這裡驗證，解析層只擋非整數
        validate_positive_size("size", self.size)
    }
}
