use crate::domain::{HeaderSet, AUTHORIZATION};
use thiserror::Error;

/// Scheme token expected in front of the key, compared case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

/// Extract the key from an `Authorization: ApiKey <key>` header.
///
/// Scheme and key are separated by a run of spaces or tabs. The remainder
/// after that run is returned as-is. A missing or empty header is `NoAuthHeader`; any other
/// shape (wrong scheme, no key, non UTF-8 value) is `MalformedAuthHeader`.
pub fn extract_api_key<H>(headers: &H) -> Result<String, AuthError>
where
    H: HeaderSet + ?Sized,
{
    let raw = headers
        .header(AUTHORIZATION)
        .filter(|v| !v.is_empty())
        .ok_or(AuthError::NoAuthHeader)?;

    let value = std::str::from_utf8(raw).map_err(|_| AuthError::MalformedAuthHeader)?;

    let (scheme, rest) = match value.find(is_ows) {
        Some(idx) => (&value[..idx], value[idx..].trim_start_matches(is_ows)),
        None => (value, ""),
    };

    if scheme != API_KEY_SCHEME || rest.trim_matches(is_ows).is_empty() {
        return Err(AuthError::MalformedAuthHeader);
    }

    Ok(rest.to_string())
}

// HTTP optional whitespace: SP / HTAB.
fn is_ows(c: char) -> bool {
    c == ' ' || c == '\t'
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn with_auth(value: &str) -> HashMap<String, String> {
        HashMap::from([(AUTHORIZATION.to_string(), value.to_string())])
    }

    struct RawHeaders(Vec<u8>);

    impl HeaderSet for RawHeaders {
        fn header(&self, name: &str) -> Option<&[u8]> {
            name.eq_ignore_ascii_case(AUTHORIZATION)
                .then_some(self.0.as_slice())
        }
    }

    #[test]
    fn missing_header_is_no_auth_header() {
        let headers: HashMap<String, String> = HashMap::new();
        assert_eq!(extract_api_key(&headers), Err(AuthError::NoAuthHeader));
    }

    #[test]
    fn empty_header_is_no_auth_header() {
        assert_eq!(extract_api_key(&with_auth("")), Err(AuthError::NoAuthHeader));
    }

    #[test]
    fn wrong_scheme_is_malformed() {
        assert_eq!(
            extract_api_key(&with_auth("Bearer abc123")),
            Err(AuthError::MalformedAuthHeader)
        );
    }

    #[test]
    fn scheme_without_key_is_malformed() {
        assert_eq!(
            extract_api_key(&with_auth("ApiKey")),
            Err(AuthError::MalformedAuthHeader)
        );
        assert_eq!(
            extract_api_key(&with_auth("ApiKey    ")),
            Err(AuthError::MalformedAuthHeader)
        );
    }

    #[test]
    fn scheme_is_case_sensitive() {
        assert_eq!(
            extract_api_key(&with_auth("apikey my-secret-key")),
            Err(AuthError::MalformedAuthHeader)
        );
        assert_eq!(
            extract_api_key(&with_auth("APIKEY my-secret-key")),
            Err(AuthError::MalformedAuthHeader)
        );
    }

    #[test]
    fn valid_header_returns_key() {
        assert_eq!(
            extract_api_key(&with_auth("ApiKey my-secret-key")),
            Ok("my-secret-key".to_string())
        );
    }

    #[test]
    fn whitespace_run_after_scheme_is_skipped() {
        assert_eq!(
            extract_api_key(&with_auth("ApiKey \t  my-secret-key")),
            Ok("my-secret-key".to_string())
        );
    }

    #[test]
    fn only_space_and_tab_separate_scheme() {
        assert_eq!(
            extract_api_key(&with_auth("ApiKey\u{a0}my-secret-key")),
            Err(AuthError::MalformedAuthHeader)
        );
        assert_eq!(
            extract_api_key(&with_auth("ApiKey\u{3000}my-secret-key")),
            Err(AuthError::MalformedAuthHeader)
        );
        assert_eq!(
            extract_api_key(&with_auth("ApiKey\tmy-secret-key")),
            Ok("my-secret-key".to_string())
        );
    }

    #[test]
    fn key_is_returned_unmodified() {
        assert_eq!(
            extract_api_key(&with_auth("ApiKey part one  two")),
            Ok("part one  two".to_string())
        );
        assert_eq!(
            extract_api_key(&with_auth("ApiKey a%20b")),
            Ok("a%20b".to_string())
        );
    }

    #[test]
    fn leading_whitespace_leaves_empty_scheme() {
        assert_eq!(
            extract_api_key(&with_auth(" ApiKey k")),
            Err(AuthError::MalformedAuthHeader)
        );
    }

    #[test]
    fn lowercase_header_name_is_found() {
        let headers = HashMap::from([("authorization".to_string(), "ApiKey k1".to_string())]);
        assert_eq!(extract_api_key(&headers), Ok("k1".to_string()));
    }

    #[test]
    fn non_utf8_value_is_malformed() {
        let headers = RawHeaders(vec![b'A', b'p', b'i', b'K', b'e', b'y', b' ', 0xff, 0xfe]);
        assert_eq!(extract_api_key(&headers), Err(AuthError::MalformedAuthHeader));
    }

    #[test]
    fn repeated_calls_agree() {
        let headers = with_auth("ApiKey my-secret-key");
        assert_eq!(extract_api_key(&headers), extract_api_key(&headers));

        let headers = with_auth("Bearer abc123");
        assert_eq!(extract_api_key(&headers), extract_api_key(&headers));
    }
}
