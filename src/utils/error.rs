use thiserror::Error;

#[derive(Error, Debug)]
pub enum Pow2Error {
    #[error("Invalid value for {field}: logarithm is undefined for size {value}")]
    DomainError { field: String, value: i64 },

    #[error("Result overflow: no 64-bit power of two is >= {value}")]
    OverflowError { value: u64 },
}

impl Pow2Error {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Pow2Error::DomainError { field, value } => {
                format!("{} must be a positive integer, got {}", field, value)
            }
            Pow2Error::OverflowError { value } => {
                format!(
                    "size {} is too large: the next power of two does not fit in 64 bits",
                    value
                )
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Pow2Error::DomainError { .. } => "Pass a size of at least 1".to_string(),
            Pow2Error::OverflowError { .. } => {
                format!("Pass a size of at most {} (2^63)", 1u64 << 63)
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Pow2Error::DomainError { .. } => 1,
            Pow2Error::OverflowError { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Pow2Error>;
