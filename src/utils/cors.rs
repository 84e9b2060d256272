use once_cell::sync::Lazy;

/// Sentinel returned when the caller's origin is not in the allow-list.
pub const REJECTED_ORIGIN: &str = "*";

static DEFAULT_ALLOWED_ORIGINS: Lazy<Vec<String>> = Lazy::new(|| {
    vec![
        "https://scinapse.io".to_string(),
        "https://dev.scinapse.io".to_string(),
        "http://localhost:3000".to_string(),
    ]
});

/// Immutable set of origins permitted to call the relay.
///
/// Injected into the handler at construction so tests can substitute their
/// own list; never mutated after creation.
#[derive(Debug, Clone)]
pub struct OriginAllowList {
    origins: Vec<String>,
}

impl OriginAllowList {
    pub fn new(origins: Vec<String>) -> Self {
        Self { origins }
    }

    /// Resolves the `Access-Control-Allow-Origin` value for a caller origin:
    /// the literal origin when allow-listed (case-sensitive match), otherwise
    /// the `*` rejection sentinel.
    pub fn resolve<'a>(&'a self, origin: &'a str) -> &'a str {
        if self.origins.iter().any(|allowed| allowed == origin) {
            origin
        } else {
            REJECTED_ORIGIN
        }
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.resolve(origin) != REJECTED_ORIGIN
    }
}

impl Default for OriginAllowList {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_ORIGINS.clone())
    }
}
