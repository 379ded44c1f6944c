use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::errors::NotifyError;

/// Request body for the Bot API `sendMessage` method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Target chat or channel.
    pub chat_id: String,
    /// Message text.
    pub text: String,
    /// How Telegram should interpret markup in `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
}

/// Markup dialects accepted by the Bot API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseMode {
    #[serde(rename = "HTML")]
    Html,
    Markdown,
    MarkdownV2,
}

#[derive(Clone)]
struct Credentials {
    bot_token: String,
    chat_id: String,
}

/// Client for delivering notifications via the Telegram Bot API.
///
/// Built once at startup from `Config`. When credentials are missing the
/// notifier stays inert and every send is skipped with a warning.
#[derive(Clone)]
pub struct TelegramNotifier {
    client: Client,
    api_base: String,
    credentials: Option<Credentials>,
}

impl TelegramNotifier {
    /// Creates a new `TelegramNotifier`.
    ///
    /// # Arguments
    ///
    /// * `config` - Resolved runtime configuration.
    pub fn new(config: &Config) -> Self {
        let credentials = match (&config.telegram_bot_token, &config.telegram_chat_id) {
            (Some(bot_token), Some(chat_id)) => Some(Credentials {
                bot_token: bot_token.clone(),
                chat_id: chat_id.clone(),
            }),
            _ => None,
        };

        Self {
            client: Client::new(),
            api_base: config.telegram_api_base.clone(),
            credentials,
        }
    }

    /// Whether both credentials are present and sends will be attempted.
    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    /// Sends `text` to the configured chat with HTML parse mode.
    ///
    /// # Returns
    ///
    /// * `true` - Telegram accepted the message.
    /// * `false` - Credentials missing, the API rejected it, or the request
    ///   failed. The cause is logged, never raised.
    pub async fn send_message(&self, text: &str) -> bool {
        let Some(credentials) = &self.credentials else {
            tracing::warn!("⚠️ Telegram credentials not set, skipping notification");
            return false;
        };

        match self.try_send(credentials, text).await {
            Ok(()) => {
                tracing::info!("✓ Telegram message sent to chat {}", credentials.chat_id);
                true
            }
            Err(NotifyError::Api { status, body }) => {
                tracing::error!("Telegram API returned {}: {}", status, body);
                false
            }
            Err(NotifyError::Transport(e)) => {
                tracing::error!("Telegram request failed: {}", e);
                false
            }
        }
    }

    async fn try_send(&self, credentials: &Credentials, text: &str) -> Result<(), NotifyError> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, credentials.bot_token);
        tracing::debug!("POST {}/bot[REDACTED]/sendMessage", self.api_base);

        let payload = OutboundMessage {
            chat_id: credentials.chat_id.clone(),
            text: text.to_string(),
            parse_mode: Some(ParseMode::Html),
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NotifyError::Api { status, body });
        }

        Ok(())
    }
}
