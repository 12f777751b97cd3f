use crate::utils::error::{Pow2Error, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_size(field_name: &str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(Pow2Error::DomainError {
            field: field_name.to_string(),
            value,
        });
    }
    Ok(())
}
