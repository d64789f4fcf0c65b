use std::collections::HashMap;

/// Header name carrying the credentials.
pub const AUTHORIZATION: &str = "Authorization";

/// Read-only view over a set of HTTP request headers.
///
/// Lookups ignore ASCII case in the header name and must be deterministic.
/// When a name appears more than once, implementations return the first
/// value. For maps keyed by case variants of one name, an exact-case key
/// wins; otherwise the lexicographically smallest variant is used.
pub trait HeaderSet {
    fn header(&self, name: &str) -> Option<&[u8]>;
}

impl HeaderSet for HashMap<String, String> {
    fn header(&self, name: &str) -> Option<&[u8]> {
        if let Some(v) = self.get(name) {
            return Some(v.as_bytes());
        }
        self.iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(name))
            .min_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, v)| v.as_bytes())
    }
}
