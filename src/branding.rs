//! Application identity.
//!
//! Names and paths that identify the application itself (not the brands it
//! generates) live here so they change in one place.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "BrandKit";

/// The binary/executable name (lowercase, no spaces).
pub const APP_BINARY_NAME: &str = "brandkit";

/// The directory name for application data.
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "BrandKit";

/// Short description for help text.
pub const APP_DESCRIPTION: &str = "Brand and logo generator";

/// Name of the JSON manifest inside exported kit archives.
pub const KIT_MANIFEST_NAME: &str = "brand-kit.json";

/// Version string reported by the health endpoint and `--version`.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branding_consistency() {
        // Ensure binary name is lowercase
        assert_eq!(APP_BINARY_NAME, APP_BINARY_NAME.to_lowercase());

        // Ensure no spaces in binary name or data dir
        assert!(!APP_BINARY_NAME.contains(' '));
        assert!(!APP_DATA_DIR.contains(' '));

        assert!(APP_DISPLAY_NAME.eq_ignore_ascii_case(APP_BINARY_NAME));
    }

    #[test]
    fn test_version_is_semver_like() {
        assert_eq!(version().split('.').count(), 3);
    }
}
