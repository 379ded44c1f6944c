use std::fmt;

/// Failure modes of a Telegram delivery attempt.
#[derive(Debug)]
pub enum NotifyError {
    /// The API answered with a non-success status.
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    /// The request never completed (connect, DNS, timeout, serialization).
    Transport(reqwest::Error),
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyError::Api { status, body } => {
                write!(f, "Telegram API returned {}: {}", status, body)
            }
            NotifyError::Transport(e) => write!(f, "Telegram request failed: {}", e),
        }
    }
}

impl std::error::Error for NotifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotifyError::Api { .. } => None,
            NotifyError::Transport(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for NotifyError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest's Display includes the request URL, whose path embeds the
        // bot token; strip it before the error can reach a log line.
        NotifyError::Transport(e.without_url())
    }
}
