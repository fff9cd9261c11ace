/// Header carrying the shared admin secret (matched case-insensitively)
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Value of `Access-Control-Allow-Origin` on every response
pub const ALLOW_ANY_ORIGIN: &str = "*";

/// Headers browsers may send on cross-origin requests
pub const CORS_ALLOWED_HEADERS: &str = "Content-Type, X-Admin-Password";

pub const JSON_CONTENT_TYPE: &str = "application/json";

// =============================================================================
// AVATAR UPLOADS
// =============================================================================

/// Key prefix for uploaded avatars
pub const AVATAR_KEY_PREFIX: &str = "avatars";

/// File name used when the client does not send one
pub const DEFAULT_AVATAR_FILE_NAME: &str = "avatar.jpg";

/// Local-time format embedded in avatar keys, e.g. `20240131_235959`
pub const AVATAR_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
