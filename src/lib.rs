//! Lead Notification Library
//!
//! This library turns submitted leads into Telegram notifications: it formats
//! a lead (plus optional qualification and research) into an HTML-markup
//! message and delivers it through the Telegram Bot API.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `format`: Notification message formatting.
//! - `models`: Core data models.
//! - `telegram`: Telegram Bot API client.

pub mod config;
pub mod errors;
pub mod format;
pub mod models;
pub mod telegram;
