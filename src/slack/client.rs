use async_trait::async_trait;
use log::*;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::{
    error::{NotifyError, Result},
    slack::{
        request::PostMessageRequest,
        traits::Notifier,
        types::{NotificationPayload, PostMessageResponse},
    },
};

pub struct SlackClient {
    client: Client,
    api_url: Url,
}

impl SlackClient {
    pub fn new(api_url: &str) -> Result<Self> {
        let api_url = Url::parse(api_url)?;

        let client = reqwest::Client::builder()
            .https_only(api_url.scheme() == "https")
            .build()?;

        Ok(Self { client, api_url })
    }
}

#[async_trait]
impl Notifier for SlackClient {
    async fn post_message(&self, payload: &NotificationPayload) -> Result<()> {
        let request = PostMessageRequest::new(&self.api_url, payload)?;

        debug!("sending {} {}", request.method, request.url);

        // awaiting response: a failure here carries no response at all
        let mut response = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;

        let status = response.status();

        // streaming body: chunks are appended in arrival order until the end
        // of the stream
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            body.extend_from_slice(&chunk);
        }

        let body = String::from_utf8_lossy(&body).into_owned();

        interpret_response(status, &body)
    }
}

/// Decides the outcome of a completed `chat.postMessage` exchange. Only a 200
/// whose JSON body has `ok: true` counts as delivered.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<()> {
    debug!("slack responded with status {status}");

    if status == StatusCode::OK
        && let Ok(response) = serde_json::from_str::<PostMessageResponse>(body)
    {
        if response.ok {
            return Ok(());
        }

        if let Some(code) = response.error {
            debug!("slack api error: {code}");
        }
    }

    Err(NotifyError::protocol(body))
}

#[cfg(test)]
mod tests {
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_json, header, method, path},
    };

    use super::*;
    use crate::message::ReleaseMessage;

    fn create_test_payload() -> NotificationPayload {
        NotificationPayload::new(
            "C123",
            "xoxb-token",
            &ReleaseMessage {
                changelog_url: "".into(),
                pretext: "New version of Widget: *v1* has been released!"
                    .into(),
                text: "*Release name*: v1".into(),
            },
        )
    }

    #[test]
    fn interpret_response_accepts_ok_true() {
        let result = interpret_response(StatusCode::OK, r#"{"ok":true}"#);
        assert!(result.is_ok());
    }

    #[test]
    fn interpret_response_rejects_ok_false() {
        let body = r#"{"ok":false,"error":"invalid_auth"}"#;

        let err = interpret_response(StatusCode::OK, body).unwrap_err();

        assert!(matches!(&err, NotifyError::Protocol { body: b } if b == body));
        assert!(err.to_string().contains(body));
    }

    #[test]
    fn interpret_response_rejects_unparsable_body() {
        let err =
            interpret_response(StatusCode::OK, "<html>oops</html>").unwrap_err();

        assert!(matches!(err, NotifyError::Protocol { .. }));
        assert!(err.to_string().contains("<html>oops</html>"));
    }

    #[test]
    fn interpret_response_rejects_non_200_even_when_ok() {
        let err = interpret_response(StatusCode::CREATED, r#"{"ok":true}"#)
            .unwrap_err();
        assert!(matches!(err, NotifyError::Protocol { .. }));

        let err = interpret_response(StatusCode::TOO_MANY_REQUESTS, "")
            .unwrap_err();
        assert!(matches!(err, NotifyError::Protocol { .. }));
    }

    #[test]
    fn interpret_response_requires_boolean_ok() {
        let err = interpret_response(StatusCode::OK, r#"{"ok":"true"}"#)
            .unwrap_err();
        assert!(matches!(err, NotifyError::Protocol { .. }));
    }

    #[tokio::test]
    async fn post_message_sends_payload_with_bearer_token() {
        let server = MockServer::start().await;
        let payload = create_test_payload();

        Mock::given(method("POST"))
            .and(path("/api/chat.postMessage"))
            .and(header("authorization", "Bearer xoxb-token"))
            .and(header("content-type", "application/json; charset=utf-8"))
            .and(header("accept", "application/json"))
            .and(body_json(&payload))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = SlackClient::new(&format!("{}/api", server.uri())).unwrap();

        let result = client.post_message(&payload).await;

        assert!(result.is_ok(), "unexpected error: {result:?}");
    }

    #[tokio::test]
    async fn post_message_reports_raw_body_on_failure() {
        let server = MockServer::start().await;
        let body = r#"{"ok":false,"error":"channel_not_found"}"#;

        Mock::given(method("POST"))
            .and(path("/api/chat.postMessage"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;

        let client = SlackClient::new(&format!("{}/api", server.uri())).unwrap();

        let err = client.post_message(&create_test_payload()).await.unwrap_err();

        assert_eq!(err.to_string(), format!("❌ Failed request: {body}"));
    }

    #[tokio::test]
    async fn post_message_reports_transport_failure() {
        // bind then drop a listener so the port refuses connections
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let client =
            SlackClient::new(&format!("http://127.0.0.1:{port}/api")).unwrap();

        let err = client.post_message(&create_test_payload()).await.unwrap_err();

        assert!(matches!(err, NotifyError::Transport));
        assert_eq!(err.to_string(), "Failed to fetch Slack");
    }
}
