//! Built-in defaults for package verification
//!
//! These mirror the layout produced by `npm pack`: a gzip tarball whose
//! contents live under a top-level `package/` directory.

pub const APP_NAME: &str = "pkgverify";
pub const CONFIG_FILE: &str = "config.toml";

pub const ARCHIVE_SUFFIX: &str = ".tgz";
pub const SCRATCH_DIR: &str = "temp-verify";
pub const PACKAGE_DIR: &str = "package";
pub const MANIFEST_FILE: &str = "package.json";

pub const REQUIRED_FILES: &[&str] = &["package.json", "src/math.js", "src/app.js"];
pub const TEST_COMMAND: &[&str] = &["npm", "test", "--", "--silent"];
