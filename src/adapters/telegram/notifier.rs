//! Telegram adapter. Implements RemoteNotifier by posting to the Bot API.

use crate::domain::{DomainError, ParseMode};
use crate::ports::RemoteNotifier;
use reqwest::{Client, StatusCode};
use std::time::Duration;

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Upper bound on a sendMessage request. Delivery is fire-and-forget; a hung
/// request must not stall the caller.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Bot API adapter for mirroring log messages into a chat.
///
/// Sends `chat_id`, `text` and `parse_mode` as a form POST to
/// `/bot<TOKEN>/sendMessage`. Success is HTTP 200 exactly; any other status
/// or transport failure maps to a [`DomainError`]. No retry.
pub struct TelegramNotifier {
    client: Client,
    base_url: String,
    bot_token: String,
    chat_id: String,
    parse_mode: ParseMode,
    timeout: Duration,
}

impl TelegramNotifier {
    /// Create a new notifier against the production Bot API.
    ///
    /// # Arguments
    /// * `bot_token` - bot credential (from @BotFather)
    /// * `chat_id` - destination chat identifier
    /// * `parse_mode` - formatting mode; must match the markup embedded in messages
    pub fn new(bot_token: String, chat_id: String, parse_mode: ParseMode) -> Self {
        Self {
            client: Client::new(),
            base_url: TELEGRAM_API_URL.to_string(),
            bot_token,
            chat_id,
            parse_mode,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the API base URL. Tests point this at a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait::async_trait]
impl RemoteNotifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), DomainError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);

        let form = [
            ("chat_id", self.chat_id.as_str()),
            ("text", text),
            ("parse_mode", self.parse_mode.as_str()),
        ];

        let res = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .form(&form)
            .send()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        let status = res.status();
        // Drain the body regardless of outcome so the connection is released.
        let _ = res.bytes().await;

        if status != StatusCode::OK {
            return Err(DomainError::UnexpectedStatus(status.as_u16()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier(base_url: &str) -> TelegramNotifier {
        TelegramNotifier::new("TOKEN".to_string(), "123".to_string(), ParseMode::Html)
            .with_base_url(base_url)
    }

    #[tokio::test]
    async fn send_posts_exact_form_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/botTOKEN/sendMessage")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body("chat_id=123&text=hello&parse_mode=HTML")
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let result = notifier(&server.url()).send("hello").await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_200_maps_to_unexpected_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/botTOKEN/sendMessage")
            .with_status(403)
            .with_body(r#"{"ok":false,"error_code":403}"#)
            .create_async()
            .await;

        let err = notifier(&server.url()).send("hello").await.unwrap_err();

        match err {
            DomainError::UnexpectedStatus(code) => assert_eq!(code, 403),
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn connection_failure_maps_to_transport() {
        // Bind-then-drop to obtain a local port with no listener behind it.
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let err = notifier(&format!("http://{addr}"))
            .with_timeout(Duration::from_secs(2))
            .send("hello")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Transport(_)));
    }

    #[tokio::test]
    async fn markdown_v2_sets_parse_mode_field() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/botTOKEN/sendMessage")
            .match_body(mockito::Matcher::UrlEncoded(
                "parse_mode".into(),
                "MarkdownV2".into(),
            ))
            .with_status(200)
            .create_async()
            .await;

        let result =
            TelegramNotifier::new("TOKEN".to_string(), "123".to_string(), ParseMode::MarkdownV2)
                .with_base_url(server.url())
                .send("*svc*: hello")
                .await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }
}
