//! Arithmetic error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArithmeticError {
    #[error("division by zero is not allowed")]
    DivisionByZero,
}

impl UserFacingError for ArithmeticError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Self::DivisionByZero => Some("arithmetic.division_by_zero"),
        }
    }
}
