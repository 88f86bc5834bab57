/**
 * Route Classifier
 *
 * Decides from the request path alone whether authentication is required.
 *
 * # Matching Rules
 *
 * - The public list is consulted first; the first public prefix that
 *   matches wins and the protected list is never looked at.
 * - A prefix matches by plain string prefix test, so `/admin` also covers
 *   `/admin/dashboard`.
 * - The root path `/` only matches itself. As a plain prefix it would
 *   match every path.
 */

use serde::{Deserialize, Serialize};

/// Default public prefixes, in match order
pub const DEFAULT_PUBLIC_PREFIXES: &[&str] = &[
    "/",
    "/login",
    "/signup",
    "/api/auth/login",
    "/api/auth/signup",
    "/api/auth/logout",
    "/static",
    "/health",
];

/// Default protected prefixes, in match order
pub const DEFAULT_PROTECTED_PREFIXES: &[&str] = &[
    "/admin",
    "/coach",
    "/student",
    "/dashboard",
    "/api/admin",
    "/api/coach",
    "/api/student",
    "/api/teams",
    "/api/events",
    "/api/posts",
    "/api/auth/me",
];

/// Result of classifying a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteClass {
    /// Exempt from authentication
    Public,
    /// Requires authentication
    Protected,
    /// Neither list matched
    Unspecified,
}

/// Static prefix policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteClassifier {
    public: Vec<String>,
    protected: Vec<String>,
}

impl Default for RouteClassifier {
    fn default() -> Self {
        Self::new(
            DEFAULT_PUBLIC_PREFIXES.iter().map(|p| p.to_string()).collect(),
            DEFAULT_PROTECTED_PREFIXES.iter().map(|p| p.to_string()).collect(),
        )
    }
}

impl RouteClassifier {
    pub fn new(public: Vec<String>, protected: Vec<String>) -> Self {
        Self { public, protected }
    }

    pub fn public_prefixes(&self) -> &[String] {
        &self.public
    }

    pub fn protected_prefixes(&self) -> &[String] {
        &self.protected
    }

    /// Classify a request path
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.public.iter().any(|prefix| prefix_matches(prefix, path)) {
            RouteClass::Public
        } else if self.protected.iter().any(|prefix| prefix_matches(prefix, path)) {
            RouteClass::Protected
        } else {
            RouteClass::Unspecified
        }
    }
}

fn prefix_matches(prefix: &str, path: &str) -> bool {
    if prefix == "/" {
        return path == "/";
    }
    path.starts_with(prefix)
}
