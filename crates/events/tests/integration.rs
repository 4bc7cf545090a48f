//! Integration tests for events

#[cfg(test)]
mod tests {
    use pkgverify_errors::VerifyError;
    use pkgverify_events::*;

    #[tokio::test]
    async fn test_event_sender_ext() {
        let (tx, mut rx) = channel();

        tx.emit_error("test error");
        tx.emit_debug("test debug");
        tx.emit_verify(VerifyEvent::EssentialFileChecked {
            path: "package.json".into(),
            found: true,
        });

        let event1 = rx.recv().await.unwrap();
        assert!(matches!(event1, AppEvent::General(GeneralEvent::Error { .. })));

        let event2 = rx.recv().await.unwrap();
        assert!(matches!(
            event2,
            AppEvent::General(GeneralEvent::DebugLog { .. })
        ));

        let event3 = rx.recv().await.unwrap();
        assert_eq!(event3.event_source(), EventSource::VERIFY);
    }

    #[tokio::test]
    async fn test_dropped_receiver() {
        let (tx, rx) = channel();
        drop(rx);

        // Should not panic when receiver is dropped
        tx.emit_warning("ignored");
    }

    #[test]
    fn test_log_levels() {
        let missing = AppEvent::Verify(VerifyEvent::EssentialFileChecked {
            path: "src/app.js".into(),
            found: false,
        });
        assert_eq!(missing.log_level(), tracing::Level::ERROR);

        let found = AppEvent::Verify(VerifyEvent::EssentialFileChecked {
            path: "src/app.js".into(),
            found: true,
        });
        assert_eq!(found.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_failure_context_from_error() {
        let err = VerifyError::MissingEssentialFile {
            path: "src/math.js".into(),
        };
        let failure = FailureContext::from_error(&err);
        assert_eq!(failure.code.as_deref(), Some("verify.missing_file"));
        assert!(failure.message.contains("src/math.js"));
        assert!(failure.hint.is_some());
        assert!(!failure.retryable);
    }

    #[test]
    fn test_event_serialization() {
        let event = AppEvent::Verify(VerifyEvent::ArchiveFound {
            path: "demo-1.0.0.tgz".into(),
            size_bytes: 2048,
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["domain"], "verify");
        assert_eq!(json["event"]["type"], "ArchiveFound");
        assert_eq!(json["event"]["size_bytes"], 2048);
    }
}
