use std::fmt::{self, Display};

/// Provides `MingleError` and maps other errors to
/// convert to a `MingleError`
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum MingleError {
    /// A numeric severity rank with no corresponding category.
    InvalidCategory(u8),
    /// A severity step was attempted past an end of the category scale.
    CategoryBounds(String),
    MingleError(String),
}

impl From<String> for MingleError {
    fn from(error: String) -> Self {
        MingleError::MingleError(error)
    }
}

impl From<&str> for MingleError {
    fn from(error: &str) -> Self {
        MingleError::MingleError(error.to_string())
    }
}

impl std::error::Error for MingleError {}

impl Display for MingleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {self:?}")?;
        Ok(())
    }
}
