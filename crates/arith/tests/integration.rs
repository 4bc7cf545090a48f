//! Integration tests for the arithmetic operations

#[cfg(test)]
mod tests {
    use pkgverify_arith::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        let scale = a.abs().max(b.abs()).max(1.0);
        (a - b).abs() <= scale * 1e-9
    }

    #[test]
    fn test_add() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(add(-1.0, 1.0), 0.0);
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(5.0, 3.0), 2.0);
        assert_eq!(subtract(10.0, 15.0), -5.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(4.0, 3.0), 12.0);
        assert_eq!(multiply(7.0, 0.0), 0.0);
    }

    #[test]
    fn test_divide() {
        assert_eq!(divide(10.0, 2.0), Ok(5.0));
        assert_eq!(divide(9.0, 3.0), Ok(3.0));
    }

    #[test]
    fn test_divide_by_zero() {
        let err = divide(5.0, 0.0).unwrap_err();
        assert_eq!(err, ArithmeticError::DivisionByZero);
        assert_eq!(err.to_string(), "division by zero is not allowed");
    }

    proptest! {
        #[test]
        fn subtract_undoes_add(a in -1e9f64..1e9, b in -1e9f64..1e9) {
            prop_assert!(approx_eq(subtract(add(a, b), b), a));
        }

        #[test]
        fn multiply_by_zero_is_zero(x in -1e12f64..1e12) {
            prop_assert_eq!(multiply(x, 0.0), 0.0);
        }

        #[test]
        fn divide_undoes_multiply(a in -1e6f64..1e6, b in prop_oneof![-1e6f64..-1e-3, 1e-3f64..1e6]) {
            let product = multiply(a, b);
            let quotient = divide(product, b).unwrap();
            prop_assert!(approx_eq(quotient, a));
        }

        #[test]
        fn divide_by_zero_always_errors(x in proptest::num::f64::ANY) {
            prop_assert_eq!(divide(x, 0.0), Err(ArithmeticError::DivisionByZero));
        }
    }
}
