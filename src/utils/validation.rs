use crate::utils::error::{MdpipeError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MdpipeError::ValidationError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

/// A command name must be a single spawnable token.
pub fn validate_command_token(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.contains('\0') {
        return Err(MdpipeError::ValidationError {
            message: format!("{} contains null bytes", field_name),
        });
    }

    Ok(())
}
