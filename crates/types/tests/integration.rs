//! Integration tests for types

#[cfg(test)]
mod tests {
    use pkgverify_types::*;
    use std::path::Path;

    #[test]
    fn test_manifest_parse_reports_fields() {
        let manifest = PackageManifest::parse(
            r#"{
                "name": "demo",
                "version": "1.0.0",
                "main": "src/app.js",
                "scripts": { "test": "jest" },
                "devDependencies": { "jest": "^29.0.0" }
            }"#,
            Path::new("package.json"),
        )
        .unwrap();

        assert_eq!(manifest.name.as_deref(), Some("demo"));
        assert_eq!(manifest.version.as_deref(), Some("1.0.0"));
        assert_eq!(manifest.main.as_deref(), Some("src/app.js"));
        assert_eq!(manifest.test_script(), Some("jest"));
    }

    #[test]
    fn test_manifest_missing_fields_are_none() {
        let manifest = PackageManifest::parse("{}", Path::new("package.json")).unwrap();
        assert_eq!(manifest, PackageManifest::default());
        assert!(manifest.test_script().is_none());
    }

    #[test]
    fn test_manifest_malformed_is_invalid_manifest() {
        let err = PackageManifest::parse("{ name: demo", Path::new("pkg/package.json"))
            .unwrap_err();
        match err {
            pkgverify_errors::Error::Verify(pkgverify_errors::VerifyError::InvalidManifest {
                path,
                ..
            }) => assert_eq!(path, "pkg/package.json"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_manifest_rejects_non_object() {
        assert!(PackageManifest::parse("[1, 2]", Path::new("package.json")).is_err());
        assert!(PackageManifest::parse(r#""demo""#, Path::new("package.json")).is_err());
    }

    #[test]
    fn test_manifest_accepts_unexpected_field_types() {
        let manifest = PackageManifest::parse(
            r#"{
                "name": 42,
                "version": 1,
                "main": null,
                "scripts": { "test": "jest", "lint": null, "build": ["tsc"] }
            }"#,
            Path::new("package.json"),
        )
        .unwrap();

        assert_eq!(manifest.name.as_deref(), Some("42"));
        assert_eq!(manifest.version.as_deref(), Some("1"));
        assert!(manifest.main.is_none());
        assert_eq!(manifest.test_script(), Some("jest"));
        assert_eq!(manifest.scripts.len(), 1);
    }

    #[test]
    fn test_manifest_ignores_non_object_scripts() {
        let manifest =
            PackageManifest::parse(r#"{"name": "demo", "scripts": "jest"}"#, Path::new("package.json"))
                .unwrap();
        assert_eq!(manifest.name.as_deref(), Some("demo"));
        assert!(manifest.test_script().is_none());
    }

    #[test]
    fn test_format_kb() {
        assert_eq!(format_kb(0), "0.00");
        assert_eq!(format_kb(1024), "1.00");
        assert_eq!(format_kb(1536), "1.50");
        assert_eq!(format_kb(2000), "1.95");
    }

    #[test]
    fn test_summary_from_manifest() {
        let manifest = PackageManifest {
            name: Some("demo".into()),
            version: Some("1.0.0".into()),
            main: None,
            ..PackageManifest::default()
        };
        let summary = ManifestSummary::from(&manifest);
        assert_eq!(summary.name.as_deref(), Some("demo"));
        assert!(summary.main.is_none());
    }

    #[test]
    fn test_color_choice_serialization() {
        let json = serde_json::to_string(&ColorChoice::Never).unwrap();
        assert_eq!(json, r#""never""#);
        let format: OutputFormat = serde_json::from_str(r#""json""#).unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
