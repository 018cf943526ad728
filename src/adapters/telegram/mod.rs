//! Telegram Bot API adapter.

pub mod notifier;

pub use notifier::TelegramNotifier;
