//! Fixed endpoints and transport defaults

use std::time::Duration;

/// Production REST API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.shift4.com";

/// Shift4 developer domain, used for the Apple Pay domain-verification file.
pub const DEV_DOMAIN: &str = "https://dev.shift4.com";

/// Well-known path of the Apple Pay merchant domain-association file.
pub const APPLE_PAY_VERIFICATION_ENDPOINT: &str =
    "/.well-known/apple-developer-merchantid-domain-association";

/// Per-call network timeout. The client blocks a web request thread, so the
/// bound stays in single-digit seconds.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
