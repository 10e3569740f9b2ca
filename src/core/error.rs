use std::fmt;

/// The core's single failure class: a precondition violation. Everything else
/// in the hash computation is total.
#[derive(Debug)]
pub enum CoreError {
    InvalidInput(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}

impl CoreError {
    pub fn invalid_input(message: &str) -> Self { CoreError::InvalidInput(message.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn test_invalid_input_error() {
        let err = CoreError::invalid_input("bit length overflows u64");
        assert_eq!(format!("{}", err), "Invalid Input: bit length overflows u64");
    }
}
