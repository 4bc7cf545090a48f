//! Integration tests for error types

#[cfg(test)]
mod tests {
    use pkgverify_errors::*;

    #[test]
    fn test_error_conversion() {
        let verify_err = VerifyError::NoArchiveFound {
            dir: ".".into(),
            suffix: ".tgz".into(),
        };
        let err: Error = verify_err.into();
        assert!(matches!(err, Error::Verify(_)));
    }

    #[test]
    fn test_error_display() {
        let err = VerifyError::MissingEssentialFile {
            path: "src/app.js".into(),
        };
        assert_eq!(
            err.to_string(),
            "essential file missing from package: src/app.js"
        );
    }

    #[test]
    fn test_error_clone() {
        let err = VerifyError::TestsFailed {
            command: "npm test".into(),
            message: "exit status 1".into(),
        };
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err: Error = io_err.into();
        assert!(matches!(
            err,
            Error::Io {
                kind: std::io::ErrorKind::PermissionDenied,
                path: None,
                ..
            }
        ));
    }

    #[test]
    fn test_io_error_with_path_message() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::io_with_path(&io_err, "/tmp/pkg.tgz");
        assert_eq!(err.user_message(), "/tmp/pkg.tgz: gone");
        assert_eq!(err.user_code(), Some("error.io"));
    }

    #[test]
    fn test_user_codes_are_forwarded() {
        let err: Error = VerifyError::InvalidManifest {
            path: "package.json".into(),
            message: "expected value".into(),
        }
        .into();
        assert_eq!(err.user_code(), Some("verify.invalid_manifest"));
        assert!(err.user_hint().is_some());
        assert!(!err.is_retryable());

        let err: Error = ConfigError::ParseError {
            message: "bad toml".into(),
        }
        .into();
        assert_eq!(err.user_code(), Some("config.parse_error"));
    }

    #[test]
    fn test_division_by_zero_message() {
        let err = ArithmeticError::DivisionByZero;
        assert_eq!(err.to_string(), "division by zero is not allowed");
        assert_eq!(err.user_code(), Some("arithmetic.division_by_zero"));
    }
}
