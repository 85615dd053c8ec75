pub mod health;
pub mod list;
pub mod gallery;
pub mod update;
pub mod favorite;
pub mod favorites;

pub use health::health_handler;
pub use list::list_routes_handler;
pub use gallery::gallery_handler;
pub use update::update_route_handler;
pub use favorite::toggle_favorite_handler;
pub use favorites::list_favorites_handler;

use axum::http::HeaderMap;

/// Header carrying the caller's user id. Trusted as sent, there is no auth.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The caller's user id, if the header is present, valid UTF-8 and non-empty
fn user_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
}

/// Parse a route id path segment by its leading integer
///
/// Leading whitespace and a sign are accepted and anything after the
/// digits is dropped, so `1abc` reads as 1. A segment with no leading
/// digits matches no route.
fn parse_route_id(id_str: &str) -> Option<i64> {
    let trimmed = id_str.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..sign_len + digits_len].parse::<i64>().ok()
}


#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_user_id_present() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("u1"));

        assert_eq!(user_id(&headers), Some("u1"));
    }

    #[test]
    fn test_user_id_missing_or_empty() {
        let mut headers = HeaderMap::new();
        assert_eq!(user_id(&headers), None);

        headers.insert(USER_ID_HEADER, HeaderValue::from_static(""));
        assert_eq!(user_id(&headers), None);
    }

    #[test]
    fn test_user_id_not_utf8() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_bytes(b"u\xff1").unwrap());

        assert_eq!(user_id(&headers), None);
    }

    #[test]
    fn test_parse_route_id() {
        assert_eq!(parse_route_id("3"), Some(3));
        assert_eq!(parse_route_id("-1"), Some(-1));
        assert_eq!(parse_route_id("+2"), Some(2));
        assert_eq!(parse_route_id("abc"), None);
        assert_eq!(parse_route_id(""), None);
        assert_eq!(parse_route_id("-"), None);
    }

    #[test]
    fn test_parse_route_id_reads_leading_integer() {
        assert_eq!(parse_route_id("1abc"), Some(1));
        assert_eq!(parse_route_id("12.5"), Some(12));
        assert_eq!(parse_route_id(" 3"), Some(3));
        assert_eq!(parse_route_id("a1"), None);
    }
}
