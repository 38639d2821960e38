//! Numeric net error codes
//!
//! Negative values, grouped by hundreds: 0-99 system, 100-199 connection,
//! 200-299 certificate, 300-399 HTTP, 400-499 cache, 600-699 FTP,
//! 700-799 certificate manager, 800-899 DNS.

pub const OK: i32 = 0;

pub const ERR_FAILED: i32 = -2;
pub const ERR_ABORTED: i32 = -3;
pub const ERR_TIMED_OUT: i32 = -7;

pub const ERR_CONNECTION_RESET: i32 = -101;
pub const ERR_CONNECTION_REFUSED: i32 = -102;
pub const ERR_NAME_NOT_RESOLVED: i32 = -105;
pub const ERR_INTERNET_DISCONNECTED: i32 = -106;

pub const ERR_CERT_COMMON_NAME_INVALID: i32 = -200;
pub const ERR_CERT_DATE_INVALID: i32 = -201;
pub const ERR_CERT_AUTHORITY_INVALID: i32 = -202;

pub const ERR_INVALID_URL: i32 = -300;
pub const ERR_TOO_MANY_REDIRECTS: i32 = -310;
pub const ERR_EMPTY_RESPONSE: i32 = -324;

pub const ERR_CACHE_MISS: i32 = -400;

pub const ERR_FTP_FAILED: i32 = -601;

pub const ERR_DNS_TIMED_OUT: i32 = -803;

const NAMES: &[(i32, &str)] = &[
    (OK, "OK"),
    (ERR_FAILED, "ERR_FAILED"),
    (ERR_ABORTED, "ERR_ABORTED"),
    (ERR_TIMED_OUT, "ERR_TIMED_OUT"),
    (ERR_CONNECTION_RESET, "ERR_CONNECTION_RESET"),
    (ERR_CONNECTION_REFUSED, "ERR_CONNECTION_REFUSED"),
    (ERR_NAME_NOT_RESOLVED, "ERR_NAME_NOT_RESOLVED"),
    (ERR_INTERNET_DISCONNECTED, "ERR_INTERNET_DISCONNECTED"),
    (ERR_CERT_COMMON_NAME_INVALID, "ERR_CERT_COMMON_NAME_INVALID"),
    (ERR_CERT_DATE_INVALID, "ERR_CERT_DATE_INVALID"),
    (ERR_CERT_AUTHORITY_INVALID, "ERR_CERT_AUTHORITY_INVALID"),
    (ERR_INVALID_URL, "ERR_INVALID_URL"),
    (ERR_TOO_MANY_REDIRECTS, "ERR_TOO_MANY_REDIRECTS"),
    (ERR_EMPTY_RESPONSE, "ERR_EMPTY_RESPONSE"),
    (ERR_CACHE_MISS, "ERR_CACHE_MISS"),
    (ERR_FTP_FAILED, "ERR_FTP_FAILED"),
    (ERR_DNS_TIMED_OUT, "ERR_DNS_TIMED_OUT"),
];

/// Symbolic name of a known net error code
pub fn error_name(code: i32) -> Option<&'static str> {
    NAMES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(error_name(ERR_NAME_NOT_RESOLVED), Some("ERR_NAME_NOT_RESOLVED"));
        assert_eq!(error_name(OK), Some("OK"));
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(error_name(-12345), None);
        assert_eq!(error_name(404), None);
    }
}
