//! Fixed policy data the rules consult.

/// Paths that are public by design and skipped entirely by the
/// unauthenticated-endpoint check.
pub const PUBLIC_PATHS: &[&str] = &["/", "/health", "/openapi.json"];

/// Literal, case-sensitive prefixes of public path families.
pub const PUBLIC_PATH_PREFIXES: &[&str] = &[
    "/auth",
    "/.well-known",
    "/account-consents/request",
    "/payment-consents/request",
    "/products",
    "/customer-leads",
    "/product-offers/consents/request",
];

/// Substrings marking endpoints that manage user consents.
pub const CONSENT_PATH_MARKERS: &[&str] = &["/account-consents/", "/payment-consents/"];

pub const INTERNAL_PATH_PREFIX: &str = "/internal/";

/// Checked in order against the lower-cased property name; the first hit wins.
pub const SENSITIVE_KEYWORDS: &[&str] = &[
    "password",
    "passwd",
    "secret",
    "token",
    "key",
    "ssn",
    "pin",
    "cvv",
    "refresh_token",
    "access_token",
    "auth",
    "credential",
    "hash",
    "otp",
];

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
        || PUBLIC_PATH_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix))
}

/// First keyword contained in `field_name`, compared case-insensitively.
pub fn sensitive_keyword(field_name: &str) -> Option<&'static str> {
    let lower = field_name.to_lowercase();
    SENSITIVE_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| lower.contains(keyword))
}
