#![deny(clippy::pedantic, unsafe_code)]

//! Four basic arithmetic operations over `f64`
//!
//! Division by exactly zero is reported as [`ArithmeticError::DivisionByZero`]
//! instead of producing an infinity or NaN.

pub use pkgverify_errors::ArithmeticError;

/// `a + b`
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// `a - b`
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// `a * b`
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// `a / b`
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] when `b` is zero (either sign).
#[allow(clippy::float_cmp)]
pub fn divide(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a / b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_divisor_is_rejected() {
        assert_eq!(divide(1.0, -0.0), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn tiny_divisor_is_allowed() {
        assert!(divide(1.0, f64::MIN_POSITIVE).is_ok());
    }
}
