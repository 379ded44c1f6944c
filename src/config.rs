use std::env;

/// Default Telegram Bot API host.
const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Runtime configuration, resolved once at startup.
///
/// Credentials are optional on purpose: a deployment without them still runs,
/// it just skips notifications.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bot token issued by BotFather.
    pub telegram_bot_token: Option<String>,
    /// Chat or channel the notifications go to.
    pub telegram_chat_id: Option<String>,
    /// API host, overridable for testing.
    pub telegram_api_base: String,
}

impl Config {
    /// Loads configuration from the environment (and `.env` when present).
    ///
    /// Never fails. Empty or whitespace-only variables are treated as unset.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let telegram_bot_token = env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let telegram_chat_id = env::var("TELEGRAM_CHAT_ID")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let telegram_api_base = env::var("TELEGRAM_API_BASE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        if telegram_bot_token.is_some() && telegram_chat_id.is_some() {
            tracing::info!("✓ Telegram notifications enabled");
        } else {
            tracing::warn!("⚠️ Telegram credentials not set, notifications will be skipped");
        }
        tracing::debug!("Telegram API base: {}", telegram_api_base);

        Self {
            telegram_bot_token,
            telegram_chat_id,
            telegram_api_base,
        }
    }
}
