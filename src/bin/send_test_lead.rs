//! Utility to send a sample lead notification to the configured Telegram chat.
//!
//! Useful for verifying credentials and eyeballing the message layout after
//! changing the formatter.

use lead_notify::config::Config;
use lead_notify::format::format_lead_notification;
use lead_notify::models::{Lead, Qualification};
use lead_notify::telegram::TelegramNotifier;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the smoke-test utility.
///
/// Loads credentials from the environment, formats a fabricated lead and
/// delivers it. Exits non-zero when credentials are missing or Telegram
/// rejects the message.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lead_notify=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let notifier = TelegramNotifier::new(&config);
    if !notifier.is_configured() {
        anyhow::bail!("TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID must be set");
    }

    let lead = Lead {
        name: "Test Lead".to_string(),
        email: "test@example.com".to_string(),
        phone: Some("+1 555 0100".to_string()),
        company: "Example Corp".to_string(),
        message: "This is a smoke-test notification.".to_string(),
    };
    let qualification = Qualification {
        category: "Qualified".to_string(),
        reason: "Smoke test, always qualified.".to_string(),
    };
    let research = "Example Corp is a fictional company used to verify that \
                    the notification pipeline is wired up end to end.";

    let text = format_lead_notification(&lead, Some(&qualification), Some(research));
    if !notifier.send_message(&text).await {
        anyhow::bail!("Telegram delivery failed, see logs above");
    }

    Ok(())
}
