//! Wiring & DI. Entry point: load config, bootstrap adapters, inject into the
//! notifying logger, emit one event per invocation.
//!
//! Usage: tg-notify [info|error|fatal] <message...>

use dotenv::dotenv;
use std::sync::Arc;
use tg_notify::adapters::log::TracingSink;
use tg_notify::adapters::telegram::TelegramNotifier;
use tg_notify::domain::{RemoteStyle, Severity};
use tg_notify::ports::{LogSink, RemoteNotifier};
use tg_notify::shared::config::AppConfig;
use tg_notify::usecases::NotifyingLogger;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Ok(path) = &env_loaded {
        info!(path = %path.display(), "loaded .env");
    }

    let cfg = AppConfig::load().unwrap_or_default();
    let bot_token = cfg.bot_token().unwrap_or_default();
    if bot_token.is_empty() {
        anyhow::bail!("Set TG_NOTIFY_BOT_TOKEN (env or .env). Get from @BotFather");
    }
    let chat_id = cfg.chat_id().unwrap_or_default();
    if chat_id.is_empty() {
        anyhow::bail!("Set TG_NOTIFY_CHAT_ID (env or .env)");
    }

    let (severity, message) = parse_args(std::env::args().skip(1).collect())?;

    let parse_mode = cfg.parse_mode_or_default();
    let sink: Arc<dyn LogSink> = Arc::new(TracingSink::new());
    let remote: Arc<dyn RemoteNotifier> = Arc::new(
        TelegramNotifier::new(bot_token, chat_id, parse_mode)
            .with_timeout(cfg.http_timeout_or_default()),
    );
    let style = RemoteStyle {
        parse_mode,
        markers: cfg.markers(),
        service_name: cfg.service_name.clone(),
    };
    let logger = NotifyingLogger::new(sink, remote, style);

    match severity {
        Severity::Info => logger.info(&message).await,
        Severity::Error => logger.error(&message).await,
        Severity::Fatal => logger.fatal(&message).await.exit(),
    }

    Ok(())
}

/// Parse `[severity] message...`. Severity defaults to info when the first
/// argument is not a known level.
fn parse_args(args: Vec<String>) -> anyhow::Result<(Severity, String)> {
    if args.is_empty() {
        anyhow::bail!("usage: tg-notify [info|error|fatal] <message...>");
    }

    let (severity, rest) = match args[0].parse::<Severity>() {
        Ok(s) => (s, &args[1..]),
        Err(_) => (Severity::Info, &args[..]),
    };

    if rest.is_empty() {
        anyhow::bail!("usage: tg-notify [info|error|fatal] <message...>");
    }

    Ok((severity, rest.join(" ")))
}
