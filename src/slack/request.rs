//! Request descriptor for `chat.postMessage`.
use reqwest::{
    Method,
    header::{
        ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, HeaderMap,
        HeaderValue,
    },
};
use url::Url;

use crate::{error::Result, slack::types::NotificationPayload};

/// Default Slack Web API base URL.
pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api";
/// Method path relative to the API base URL.
pub const POST_MESSAGE_METHOD: &str = "chat.postMessage";

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
const JSON_ACCEPT: &str = "application/json";

/// Everything needed to issue a single `chat.postMessage` call: method,
/// destination, headers and the serialized body.
#[derive(Debug)]
pub struct PostMessageRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl PostMessageRequest {
    pub fn new(api_url: &Url, payload: &NotificationPayload) -> Result<Self> {
        let url = post_message_url(api_url)?;
        let body = serde_json::to_vec(payload)?;

        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", payload.token))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_ACCEPT));

        Ok(Self {
            method: Method::POST,
            url,
            headers,
            body,
        })
    }

    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    pub fn port(&self) -> Option<u16> {
        self.url.port_or_known_default()
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }
}

/// Joins the method name onto the base URL, keeping any base path.
fn post_message_url(api_url: &Url) -> Result<Url> {
    let mut base = api_url.clone();

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    Ok(base.join(POST_MESSAGE_METHOD)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ReleaseMessage;

    fn create_test_payload(pretext: &str) -> NotificationPayload {
        NotificationPayload::new(
            "C123",
            "xoxb-token",
            &ReleaseMessage {
                changelog_url: "".into(),
                pretext: pretext.into(),
                text: "text".into(),
            },
        )
    }

    #[test]
    fn targets_post_message_over_https() {
        let api_url = Url::parse(DEFAULT_SLACK_API_URL).unwrap();

        let request =
            PostMessageRequest::new(&api_url, &create_test_payload("hi"))
                .unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.scheme(), "https");
        assert_eq!(request.host(), "slack.com");
        assert_eq!(request.port(), Some(443));
        assert_eq!(request.path(), "/api/chat.postMessage");
    }

    #[test]
    fn keeps_base_path_with_trailing_slash() {
        let api_url = Url::parse("http://localhost:8080/api/").unwrap();

        let request =
            PostMessageRequest::new(&api_url, &create_test_payload("hi"))
                .unwrap();

        assert_eq!(
            request.url.as_str(),
            "http://localhost:8080/api/chat.postMessage"
        );
    }

    #[test]
    fn sets_json_and_bearer_headers() {
        let api_url = Url::parse(DEFAULT_SLACK_API_URL).unwrap();

        let request =
            PostMessageRequest::new(&api_url, &create_test_payload("hi"))
                .unwrap();

        assert_eq!(
            request.headers[CONTENT_TYPE],
            "application/json; charset=utf-8"
        );
        assert_eq!(request.headers[ACCEPT], "application/json");
        assert_eq!(request.headers[AUTHORIZATION], "Bearer xoxb-token");
        assert!(request.headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn content_length_is_byte_length_of_body() {
        let api_url = Url::parse(DEFAULT_SLACK_API_URL).unwrap();
        // multi-byte characters make byte and character counts differ
        let payload = create_test_payload("Nouvelle version: été ✅");

        let request = PostMessageRequest::new(&api_url, &payload).unwrap();

        let expected = serde_json::to_string(&payload).unwrap();
        assert_eq!(request.body, expected.as_bytes());
        assert_eq!(
            request.headers[CONTENT_LENGTH],
            expected.len().to_string().as_str()
        );
        assert!(expected.len() > expected.chars().count());
    }
}
