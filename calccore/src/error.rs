//! Calculator errors
//!
//! Every error is recovered by showing its message in the display, so the
//! `Display` text of each variant is exactly what the user sees.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// The input could not be read as a number when an operator was chosen.
    #[error("Invalid Input")]
    InvalidInput,
    /// The second operand could not be read as a number on equals.
    #[error("Error")]
    MalformedOperand,
    #[error("Cannot divide by zero")]
    DivideByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CalcError::InvalidInput.to_string(), "Invalid Input");
        assert_eq!(CalcError::MalformedOperand.to_string(), "Error");
        assert_eq!(CalcError::DivideByZero.to_string(), "Cannot divide by zero");
    }
}
