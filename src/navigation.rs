// ========================================
// NAVIGATION (redirect with status message)
// ========================================

use std::fmt;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

/// URI-component set: everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Error,
    Success,
}

impl MessageKind {
    /// Query-string key carrying the message.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Error => "error",
            MessageKind::Success => "success",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A redirect the calling layer has to carry out.
///
/// Handlers return it like any other response; the conversion to HTTP
/// happens in `IntoResponse` (303 See Other + `Location`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    Redirect { target: String },
}

impl NavigationIntent {
    pub fn redirect(target: impl Into<String>) -> Self {
        NavigationIntent::Redirect { target: target.into() }
    }

    pub fn target(&self) -> &str {
        match self {
            NavigationIntent::Redirect { target } => target,
        }
    }
}

impl IntoResponse for NavigationIntent {
    fn into_response(self) -> Response {
        let NavigationIntent::Redirect { target } = self;

        match HeaderValue::try_from(target) {
            Ok(location) => (StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response(),
            Err(e) => {
                tracing::error!("Redirect target is not a valid Location header: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Redirect to `path`, carrying `message` as `?{kind}={percent-encoded message}`.
///
/// An absent or empty message leaves `path` untouched. The `?` is appended
/// as-is: a `path` that already has a query string ends up with two `?`.
pub fn encoded_redirect(kind: MessageKind, path: &str, message: Option<&str>) -> NavigationIntent {
    match message.filter(|m| !m.is_empty()) {
        Some(message) => NavigationIntent::redirect(format!(
            "{}?{}={}",
            path,
            kind,
            utf8_percent_encode(message, URI_COMPONENT)
        )),
        None => NavigationIntent::redirect(path),
    }
}

// ========================================
// READING THE MESSAGE BACK
// ========================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    /// Parses a raw query string (leading `?` optional). Undecodable pairs are skipped.
    pub fn from_query(query: &str) -> Option<Self> {
        let mut status = StatusQuery::default();

        for pair in query.trim_start_matches('?').split('&') {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let slot = match key {
                "error" => &mut status.error,
                "success" => &mut status.success,
                _ => continue,
            };
            if slot.is_some() {
                continue;
            }
            let raw = raw.replace('+', " ");
            if let Ok(text) = percent_decode_str(&raw).decode_utf8() {
                *slot = Some(text.into_owned());
            }
        }

        status.into_message()
    }
}

/// Query payload for axum's `Query` extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

impl StatusQuery {
    /// `error` wins when both are present; empty values count as absent.
    pub fn into_message(self) -> Option<StatusMessage> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());

        non_empty(self.error)
            .map(|text| StatusMessage::new(MessageKind::Error, text))
            .or_else(|| non_empty(self.success).map(|text| StatusMessage::new(MessageKind::Success, text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_encoded_message() {
        let intent = encoded_redirect(MessageKind::Error, "/login", Some("Invalid credentials"));
        assert_eq!(intent.target(), "/login?error=Invalid%20credentials");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let intent = encoded_redirect(MessageKind::Success, "/done", Some("a&b=c?d e/f"));
        assert_eq!(intent.target(), "/done?success=a%26b%3Dc%3Fd%20e%2Ff");
    }

    #[test]
    fn uri_component_marks_pass_through() {
        let intent = encoded_redirect(MessageKind::Success, "/x", Some("Hi! (it's *ok*) ~_.-"));
        assert_eq!(intent.target(), "/x?success=Hi!%20(it's%20*ok*)%20~_.-");
    }

    #[test]
    fn plus_and_percent_are_escaped() {
        let intent = encoded_redirect(MessageKind::Error, "/x", Some("1+1=100%"));
        assert_eq!(intent.target(), "/x?error=1%2B1%3D100%25");
    }

    #[test]
    fn non_ascii_is_utf8_percent_encoded() {
        let intent = encoded_redirect(MessageKind::Success, "/", Some("café"));
        assert_eq!(intent.target(), "/?success=caf%C3%A9");
    }

    #[test]
    fn absent_message_keeps_path() {
        let intent = encoded_redirect(MessageKind::Success, "/dashboard", None);
        assert_eq!(intent, NavigationIntent::redirect("/dashboard"));
    }

    #[test]
    fn empty_message_keeps_path() {
        let intent = encoded_redirect(MessageKind::Error, "/login", Some(""));
        assert_eq!(intent.target(), "/login");
    }

    #[test]
    fn existing_query_is_not_merged() {
        let intent = encoded_redirect(MessageKind::Error, "/login?next=/a", Some("x"));
        assert_eq!(intent.target(), "/login?next=/a?error=x");
    }

    #[test]
    fn into_response_is_see_other_with_location() {
        let response = encoded_redirect(MessageKind::Error, "/login", Some("Nope")).into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login?error=Nope");
    }

    #[test]
    fn invalid_location_becomes_server_error() {
        let response = NavigationIntent::redirect("/bad\npath").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn message_reads_back_from_query() {
        let intent = encoded_redirect(MessageKind::Error, "/login", Some("a&b = c"));
        let (_, query) = intent.target().split_once('?').unwrap();

        let status = StatusMessage::from_query(query).unwrap();

        assert_eq!(status, StatusMessage::new(MessageKind::Error, "a&b = c"));
    }

    #[test]
    fn from_query_handles_plus_and_leading_question_mark() {
        let status = StatusMessage::from_query("?foo=1&success=All+good").unwrap();
        assert_eq!(status, StatusMessage::new(MessageKind::Success, "All good"));
    }

    #[test]
    fn error_takes_precedence_over_success() {
        let status = StatusMessage::from_query("success=yay&error=boom").unwrap();
        assert_eq!(status.kind, MessageKind::Error);
        assert_eq!(status.text, "boom");
    }

    #[test]
    fn no_status_in_query() {
        assert!(StatusMessage::from_query("").is_none());
        assert!(StatusMessage::from_query("page=2").is_none());
        assert!(StatusMessage::from_query("error=").is_none());
    }
}
