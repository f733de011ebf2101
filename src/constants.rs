//! Application-wide constants.
//!
//! This module centralizes the application identity strings and the fixed
//! numeric limits shared across modules.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Folio";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "folio";

/// The directory name for application data (preferences).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/Folio/`
/// - macOS: `~/Library/Application Support/Folio/`
/// - Windows: `%APPDATA%\Folio\`
pub const APP_DATA_DIR: &str = "Folio";

/// Filename of the portfolio content configuration inside the site root.
pub const CONFIG_FILE_NAME: &str = "portfolio.json5";

/// Default port for the development server when neither the configuration
/// nor the command line provides one.
pub const DEFAULT_PORT: u16 = 3000;

/// Default `Cache-Control` header value for served files.
pub const DEFAULT_CACHE_CONTROL: &str = "no-cache";

/// Viewport widths at or below this value are treated as mobile.
pub const MOBILE_BREAKPOINT: u32 = 768;
