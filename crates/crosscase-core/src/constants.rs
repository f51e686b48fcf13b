/// Crosscase system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Catalog ids for the built-in correlation attribute types.
pub const FILES_TYPE_ID: u32 = 0;
pub const DOMAIN_TYPE_ID: u32 = 1;
pub const EMAIL_TYPE_ID: u32 = 2;
pub const PHONE_TYPE_ID: u32 = 3;
pub const USB_ID_TYPE_ID: u32 = 4;
pub const SSID_TYPE_ID: u32 = 5;

/// Upper bound for the occurrence-frequency ceiling (a percentage).
pub const MAX_PERCENTAGE_THRESHOLD: u32 = 100;
