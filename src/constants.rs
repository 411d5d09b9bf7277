//! Application constants and configuration

pub const DEFAULT_API_BASE_URL: &str = "https://onurl.vercel.app";
pub const SHORTEN_ENDPOINT: &str = "/api/shorturl";
pub const API_BASE_ENV_VAR: &str = "SHORTLY_API_BASE";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// On-screen QR code edge length in points
pub const QR_CODE_SIZE: u32 = 256;
/// Exported QR PNG edge length (2x the on-screen size)
pub const QR_EXPORT_SIZE: u32 = QR_CODE_SIZE * 2;
/// Default filename offered by the save dialog
pub const QR_FILE_NAME: &str = "qr-link.png";

/// How long the "Copied" indicator stays visible
pub const COPY_FEEDBACK_MS: u64 = 2000;

/// Maximum accepted custom alias length
pub const MAX_ALIAS_LEN: usize = 50;
